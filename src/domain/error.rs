use thiserror::Error;

/// Every failure the processor can hit. Variants only tag the origin for logging;
/// the processor reports all of them through the same failure outcome.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Failed to fetch object: {0}")]
    Fetch(String),

    #[error("Failed to decode object as UTF-8: {0}")]
    Decode(String),

    #[error("Failed to parse CSV: {0}")]
    Parse(String),

    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid trigger event: {0}")]
    InvalidEvent(String),
}
