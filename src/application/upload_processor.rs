use std::sync::Arc;
use tracing::{info, debug, error};
use crate::{
    config::Config,
    domain::{
        error::IngestionError,
        models::{ObjectReference, PerformanceRecord, ProcessingOutcome},
        ports::{FileFetcher, Notifier, RecordRepository},
    },
    infrastructure::parsers::csv_parser::parse_csv,
};

pub const SUCCESS_SUBJECT: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "CSV file successfully uploaded and parsed";
pub const ERROR_SUBJECT: &str = "Error";

/// Fetches an uploaded CSV, upserts one record per row and reports the outcome.
///
/// Rows are written one at a time with no rollback: when a row fails, the rows
/// before it stay in the table.
pub struct UploadProcessor {
    file_fetcher: Arc<dyn FileFetcher>,
    record_repo: Arc<dyn RecordRepository>,
    notifier: Arc<dyn Notifier>,
    config: Config,
}

impl UploadProcessor {
    pub fn new(
        file_fetcher: Arc<dyn FileFetcher>,
        record_repo: Arc<dyn RecordRepository>,
        notifier: Arc<dyn Notifier>,
        config: Config,
    ) -> Self {
        Self {
            file_fetcher,
            record_repo,
            notifier,
            config,
        }
    }

    /// Runs one upload through to a single outcome notification.
    ///
    /// Processing failures never escape: they become a `500` outcome. The only
    /// error returned is a failure to publish the outcome notification itself.
    pub async fn process(&self, object: &ObjectReference) -> Result<ProcessingOutcome, IngestionError> {
        info!("Starting upload processing: s3://{}/{}", object.bucket, object.key);

        match self.ingest(object).await {
            Ok(rows) => {
                info!("✅ Stored {} records from s3://{}/{} in {}",
                    rows, object.bucket, object.key, self.config.table_name);
                self.notifier
                    .publish(&self.config.topic_arn, SUCCESS_SUBJECT, SUCCESS_MESSAGE)
                    .await?;
                Ok(ProcessingOutcome::success())
            },
            Err(e) => {
                let message = e.to_string();
                error!("Processing s3://{}/{} failed: {}", object.bucket, object.key, message);
                self.notifier
                    .publish(&self.config.topic_arn, ERROR_SUBJECT, &message)
                    .await?;
                Ok(ProcessingOutcome::failure(&message))
            }
        }
    }

    async fn ingest(&self, object: &ObjectReference) -> Result<usize, IngestionError> {
        debug!("Step 1: Fetching object s3://{}/{}", object.bucket, object.key);
        let bytes = self.file_fetcher.fetch_file(&object.bucket, &object.key).await?;
        info!("Fetched object, size: {} bytes", bytes.len());

        debug!("Step 2: Decoding object as UTF-8");
        let text = String::from_utf8(bytes)
            .map_err(|e| IngestionError::Decode(e.to_string()))?;

        debug!("Step 3: Parsing CSV");
        let mut rows = parse_csv(&text)?;

        debug!("Step 4: Upserting records into {}", self.config.table_name);
        for row in rows.by_ref() {
            let record = PerformanceRecord::from_row(&row?)?;
            self.record_repo.upsert_record(&self.config.table_name, &record).await?;
        }

        Ok(rows.rows_read())
    }
}
