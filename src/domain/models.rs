use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::domain::error::IngestionError;

pub const SUCCESS_STATUS: u16 = 200;
pub const FAILURE_STATUS: u16 = 500;
pub const SUCCESS_BODY: &str = "CSV processed successfully";

/// One CSV data line, keyed by header name.
pub type CsvRow = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectReference {
    pub bucket: String,
    pub key: String,
}

impl ObjectReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// A single performance slot as stored in the table.
///
/// `performer` and `date_stage` together make up the table's composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceRecord {
    pub performer: String,
    pub date_stage: String,
    pub start: String,
    pub end: String,
}

impl PerformanceRecord {
    pub const PERFORMER: &'static str = "Performer";
    pub const DATE_STAGE: &'static str = "Date-Stage";
    pub const START: &'static str = "Start";
    pub const END: &'static str = "End";

    const DATE_COLUMN: &'static str = "Date";
    const STAGE_COLUMN: &'static str = "Stage";

    /// Builds a record from a parsed row. Values are taken verbatim; the only
    /// check is that every column looked up exists.
    pub fn from_row(row: &CsvRow) -> Result<Self, IngestionError> {
        let performer = column(row, Self::PERFORMER)?;
        let date = column(row, Self::DATE_COLUMN)?;
        let stage = column(row, Self::STAGE_COLUMN)?;
        let start = column(row, Self::START)?;
        let end = column(row, Self::END)?;

        Ok(Self {
            performer: performer.to_string(),
            date_stage: format!("{}-{}", date, stage),
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

fn column<'a>(row: &'a CsvRow, name: &str) -> Result<&'a str, IngestionError> {
    row.get(name)
        .map(String::as_str)
        .ok_or_else(|| IngestionError::MissingColumn(name.to_string()))
}

/// What the invoking runtime receives back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingOutcome {
    pub status_code: u16,
    pub body: String,
}

impl ProcessingOutcome {
    pub fn success() -> Self {
        Self {
            status_code: SUCCESS_STATUS,
            body: SUCCESS_BODY.to_string(),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            status_code: FAILURE_STATUS,
            body: format!("Error: {}", message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }
}
