use aws_lambda_events::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{info, warn, instrument};
use crate::{
    application::upload_processor::UploadProcessor,
    domain::{
        error::IngestionError,
        models::{ObjectReference, ProcessingOutcome},
    },
};

/// Only the first record of the event is read; any further records are ignored.
pub fn object_reference(event: &S3Event) -> Result<ObjectReference, IngestionError> {
    let record = event.records.first()
        .ok_or_else(|| IngestionError::InvalidEvent("event contains no records".to_string()))?;

    if event.records.len() > 1 {
        warn!("Event carries {} records, only the first is processed", event.records.len());
    }

    let bucket = record.s3.bucket.name.as_deref()
        .ok_or_else(|| IngestionError::InvalidEvent("record is missing s3.bucket.name".to_string()))?;
    let key = record.s3.object.key.as_deref()
        .ok_or_else(|| IngestionError::InvalidEvent("record is missing s3.object.key".to_string()))?;

    Ok(ObjectReference::new(bucket, key))
}

/// Lambda entry point. Processing failures come back as a `500` outcome; only a
/// malformed event or a failed outcome notification is reported to the runtime as an error.
#[instrument(skip(processor, event), fields(request_id = %event.context.request_id))]
pub async fn handler(
    processor: &UploadProcessor,
    event: LambdaEvent<S3Event>,
) -> Result<ProcessingOutcome, Error> {
    let object = object_reference(&event.payload).map_err(|e| {
        warn!("Rejecting event: {}", e);
        e
    })?;

    let outcome = processor.process(&object).await?;
    info!("Invocation finished with status {}", outcome.status_code);

    Ok(outcome)
}
