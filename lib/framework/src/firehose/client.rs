use std::fmt::Debug;

use serde::Serialize;
use thiserror::Error;
use tracing::Instrument;
use tracing::debug;
use tracing::debug_span;
use tracing::info;

use super::config::FirehoseConfig;
use super::writer::FirehoseWriter;
use super::writer::RecordWriter;
use crate::exception::CoreRsResult;
use crate::exception::error_code;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to serialize record, error={0}")]
    Serialization(#[source] serde_json::Error),
    #[error("failed to put record, stream={stream}, cause={cause}")]
    Delivery { stream: String, cause: String },
}

impl SendError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SendError::Serialization(_) => error_code::SERIALIZATION_ERROR,
            SendError::Delivery { .. } => error_code::DELIVERY_ERROR,
        }
    }
}

/// Handle to one delivery stream. The stream is fixed for the lifetime of the handle.
pub struct FirehoseClient<W = FirehoseWriter>
where
    W: RecordWriter,
{
    writer: W,
    stream: String,
}

impl FirehoseClient<FirehoseWriter> {
    pub async fn new(config: &FirehoseConfig) -> CoreRsResult<Self> {
        validate_stream(&config.stream)?;
        let sdk_config = config.load_sdk_config().await?;
        Self::with_writer(&config.stream, FirehoseWriter::new(&sdk_config))
    }
}

impl<W> FirehoseClient<W>
where
    W: RecordWriter,
{
    pub fn with_writer(stream: &str, writer: W) -> CoreRsResult<Self> {
        validate_stream(stream)?;
        info!(stream, "firehose client created");
        Ok(Self {
            writer,
            stream: stream.to_owned(),
        })
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// Serializes `record` to JSON and puts it to the stream with a single request, without retry.
    pub async fn send<T>(&self, record: &T) -> Result<(), SendError>
    where
        T: Serialize + Debug,
    {
        let span = debug_span!("firehose", stream = %self.stream);
        async {
            let payload = serde_json::to_vec(record).map_err(SendError::Serialization)?;

            debug!(firehose_write_entries = 1, firehose_write_bytes = payload.len(), "stats");
            debug!(stream = %self.stream, record = ?record, "put_record");

            self.writer
                .put_record(&self.stream, payload)
                .await
                .map_err(|cause| SendError::Delivery {
                    stream: self.stream.clone(),
                    cause,
                })
        }
        .instrument(span)
        .await
    }
}

impl<W> Drop for FirehoseClient<W>
where
    W: RecordWriter,
{
    fn drop(&mut self) {
        info!(stream = %self.stream, "firehose client closed");
    }
}

fn validate_stream(stream: &str) -> CoreRsResult<()> {
    if stream.trim().is_empty() {
        return Err(exception!(
            code = error_code::CONFIG_ERROR,
            message = "firehose stream must not be empty"
        ));
    }
    Ok(())
}
