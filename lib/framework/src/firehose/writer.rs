use aws_config::SdkConfig;
use aws_sdk_firehose::Client;
use aws_sdk_firehose::error::DisplayErrorContext;
use aws_sdk_firehose::error::ProvideErrorMetadata;
use aws_sdk_firehose::primitives::Blob;
use aws_sdk_firehose::types::Record;

/// Remote side of a delivery client, one `put_record` is exactly one write request.
pub trait RecordWriter {
    /// Returns the failure cause as reported by the remote side.
    fn put_record(&self, stream: &str, data: Vec<u8>) -> impl Future<Output = Result<(), String>> + Send;
}

pub struct FirehoseWriter {
    client: Client,
}

impl FirehoseWriter {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

impl RecordWriter for FirehoseWriter {
    async fn put_record(&self, stream: &str, data: Vec<u8>) -> Result<(), String> {
        let record = Record::builder()
            .data(Blob::new(data))
            .build()
            .map_err(|err| DisplayErrorContext(err).to_string())?;

        self.client
            .put_record()
            .delivery_stream_name(stream)
            .record(record)
            .send()
            .await
            .map(|_| ())
            .map_err(|err| match err.code() {
                Some(code) => format!("{code}: {}", err.message().unwrap_or_default()),
                None => DisplayErrorContext(err).to_string(),
            })
    }
}
