use async_trait::async_trait;
use crate::domain::{error::IngestionError, models::PerformanceRecord};

#[async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch_file(&self, bucket: &str, key: &str) -> Result<Vec<u8>, IngestionError>;
}

/// Write-or-overwrite by the record's composite key.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn upsert_record(&self, target_table: &str, record: &PerformanceRecord) -> Result<(), IngestionError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic: &str, subject: &str, message: &str) -> Result<(), IngestionError>;
}
