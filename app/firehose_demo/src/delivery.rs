use std::fmt::Debug;
use std::time::Duration;

use framework::firehose::client::FirehoseClient;
use framework::firehose::writer::RecordWriter;
use serde::Serialize;
use tokio::time;
use tracing::info;
use tracing::warn;

use crate::record::RecordSource;

pub struct DeliveryLoopConfig {
    pub iterations: u32,
    pub delay: Duration,
}

impl Default for DeliveryLoopConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            delay: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct DeliverySummary {
    pub sent: u32,
    pub failed: u32,
}

/// Sends one record then waits `delay`, `iterations` times. Failures are reported and never stop or slow down the loop.
pub async fn run<W, S>(client: &FirehoseClient<W>, source: &mut S, config: &DeliveryLoopConfig) -> DeliverySummary
where
    W: RecordWriter,
    S: RecordSource,
    S::Record: Serialize + Debug,
{
    let mut summary = DeliverySummary::default();
    for iteration in 1..=config.iterations {
        let record = source.next_record();
        match client.send(&record).await {
            Ok(()) => {
                summary.sent += 1;
                info!(iteration, "sent successfully");
            }
            Err(err) => {
                summary.failed += 1;
                warn!(
                    iteration,
                    error_code = err.error_code(),
                    "an error occurred sending to firehose, {err}"
                );
            }
        }
        time::sleep(config.delay).await;
    }
    summary
}
