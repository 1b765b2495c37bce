use tracing::info;
use crate::domain::error::IngestionError;

pub const TABLE_ENV: &str = "DYNAMO_TABLE";
pub const TOPIC_ENV: &str = "SNS_TOPIC";
pub const ENDPOINT_ENV: &str = "AWS_ENDPOINT_URL";

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub topic_arn: String,
}

impl Config {
    pub fn from_env() -> Result<Self, IngestionError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, IngestionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = required(&lookup, TABLE_ENV)?;
        let topic_arn = required(&lookup, TOPIC_ENV)?;
        info!("Using table {} and topic {}", table_name, topic_arn);

        Ok(Self { table_name, topic_arn })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, IngestionError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .ok_or_else(|| IngestionError::Config(format!("{} environment variable is required", name)))
}

/// Shared AWS settings. `AWS_ENDPOINT_URL` points every client at e.g. LocalStack.
pub async fn load_aws_config() -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Ok(endpoint_url) = std::env::var(ENDPOINT_ENV) {
        info!("Using custom AWS endpoint: {}", endpoint_url);
        builder = builder.endpoint_url(&endpoint_url);
    }

    builder.load().await
}

/// LocalStack only serves path-style bucket addressing.
pub fn s3_client(aws_config: &aws_config::SdkConfig) -> aws_sdk_s3::Client {
    let mut s3_config = aws_sdk_s3::config::Builder::from(aws_config);
    if std::env::var(ENDPOINT_ENV).is_ok() {
        s3_config = s3_config.force_path_style(true);
    }
    aws_sdk_s3::Client::from_conf(s3_config.build())
}
