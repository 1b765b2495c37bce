use async_trait::async_trait;
use aws_sdk_sns::Client;
use tracing::{debug, error};
use crate::domain::{error::IngestionError, ports::Notifier};

pub struct SnsNotifier {
    client: Client,
}

impl SnsNotifier {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), IngestionError> {
        let output = self.client
            .publish()
            .topic_arn(topic)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to publish '{}' to {}: {}", subject, topic, e);
                IngestionError::Notification(e.to_string())
            })?;

        debug!("Published '{}' notification, message id {:?}", subject, output.message_id());
        Ok(())
    }
}
