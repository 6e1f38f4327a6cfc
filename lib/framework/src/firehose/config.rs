use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_config::SdkConfig;
use aws_config::timeout::TimeoutConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_firehose::config::Credentials;
use aws_sdk_firehose::config::Region;
use serde::Deserialize;
use tracing::info;

use crate::exception::CoreRsResult;
use crate::exception::error_code;

#[derive(Debug, Deserialize, Clone)]
pub struct FirehoseConfig {
    pub stream: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub credentials: CredentialSource,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    /// env vars, shared profile files, then container/instance metadata
    #[default]
    Environment,
    Profile {
        name: String,
    },
    Static {
        access_key_id: String,
        secret_access_key: String,
        #[serde(default)]
        session_token: Option<String>,
    },
}

impl FirehoseConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub(super) async fn load_sdk_config(&self) -> CoreRsResult<SdkConfig> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref region) = self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        match self.credentials {
            CredentialSource::Environment => {}
            CredentialSource::Profile { ref name } => {
                loader = loader.profile_name(name);
            }
            CredentialSource::Static {
                ref access_key_id,
                ref secret_access_key,
                ref session_token,
            } => {
                loader = loader.credentials_provider(Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "firehose_config",
                ));
            }
        }
        if let Some(ref endpoint_url) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(timeout) = self.timeout() {
            loader = loader.timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());
        }

        let sdk_config = loader.load().await;
        let region = sdk_config.region().ok_or_else(|| {
            exception!(
                code = error_code::CONFIG_ERROR,
                message = "aws region is not resolved, set region in config or AWS_REGION"
            )
        })?;
        let credentials_provider = sdk_config.credentials_provider().ok_or_else(|| {
            exception!(
                code = error_code::CONFIG_ERROR,
                message = "aws credentials provider is not configured"
            )
        })?;
        credentials_provider.provide_credentials().await.map_err(|err| {
            exception!(
                code = error_code::CONFIG_ERROR,
                message = format!(
                    "failed to resolve aws credentials, source={}",
                    self.credentials.kind()
                ),
                source = err
            )
        })?;
        info!(region = %region, credentials = self.credentials.kind(), "loaded aws config");
        Ok(sdk_config)
    }
}

impl CredentialSource {
    fn kind(&self) -> &'static str {
        match self {
            CredentialSource::Environment => "environment",
            CredentialSource::Profile { .. } => "profile",
            CredentialSource::Static { .. } => "static",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::CredentialSource;
    use super::FirehoseConfig;
    use crate::json::from_json;

    #[test]
    fn defaults() {
        let config: FirehoseConfig = from_json(r#"{"stream": "calvinfo"}"#).unwrap();
        assert_eq!(config.stream, "calvinfo");
        assert_eq!(config.region, None);
        assert_eq!(config.credentials, CredentialSource::Environment);
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn credential_sources() {
        let config: FirehoseConfig = from_json(
            r#"{"stream": "calvinfo", "region": "us-west-2", "credentials": {"type": "profile", "name": "dev"}, "timeout_ms": 3000}"#,
        )
        .unwrap();
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert_eq!(
            config.credentials,
            CredentialSource::Profile {
                name: "dev".to_owned()
            }
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));

        let config: FirehoseConfig = from_json(
            r#"{"stream": "calvinfo", "credentials": {"type": "static", "access_key_id": "AKID", "secret_access_key": "SECRET"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.credentials,
            CredentialSource::Static {
                access_key_id: "AKID".to_owned(),
                secret_access_key: "SECRET".to_owned(),
                session_token: None,
            }
        );
    }

    #[test]
    fn missing_stream() {
        let result: Result<FirehoseConfig, _> = from_json(r#"{"region": "us-east-1"}"#);
        assert!(result.is_err());
    }
}
