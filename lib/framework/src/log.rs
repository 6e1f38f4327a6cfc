use std::time::Instant;

use chrono::SecondsFormat;
use chrono::Utc;
use tracing::Instrument;
use tracing::Level;
use tracing::debug;
use tracing::info;
use tracing::info_span;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::exception::CoreRsResult;
use crate::exception::Exception;
use crate::exception::Severity;

pub mod id_generator;

pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(false) // generally cloud log console doesn't support color
                .with_line_number(true)
                .with_thread_ids(true)
                .with_filter(LevelFilter::INFO),
        )
        .init();
}

macro_rules! log_event {
    (level = $level:ident, error_code = $error_code:expr, $($arg:tt)+) => {
        match $level {
            ::tracing::Level::TRACE | ::tracing::Level::DEBUG | ::tracing::Level::INFO => {},
            ::tracing::Level::WARN => {
                match $error_code {
                    Some(ref error_code) => ::tracing::warn!(error_code, $($arg)+),
                    None => ::tracing::warn!($($arg)+),
                }
            },
            ::tracing::Level::ERROR => {
                match $error_code {
                    Some(ref error_code) => ::tracing::error!(error_code, $($arg)+),
                    None => ::tracing::error!($($arg)+),
                }
            }
        }
    };
}

/// Runs `task` inside an `action` span, an escaping exception is logged instead of returned.
pub async fn start_action<T>(action: &str, task: T)
where
    T: Future<Output = CoreRsResult<()>>,
{
    let action_id = id_generator::random_id();
    let action_span = info_span!("action", action, action_id);
    async {
        let start_time = Instant::now();
        debug!(
            date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "action begin"
        );
        if let Err(e) = task.await {
            log_exception(&e);
        }
        info!(elapsed = ?start_time.elapsed(), "action end");
    }
    .instrument(action_span)
    .await;
}

pub fn log_exception(e: &Exception) {
    let level = match e.severity {
        Severity::Warn => Level::WARN,
        Severity::Error => Level::ERROR,
    };
    let message = &e.message;
    log_event!(
        level = level,
        error_code = e.code,
        backtrace = e.to_string(),
        "{message}"
    );
}
