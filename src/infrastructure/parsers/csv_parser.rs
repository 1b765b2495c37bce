use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::io::Cursor;
use tracing::{debug, info, error};
use crate::domain::{error::IngestionError, models::CsvRow};

/// Lazily yields header-keyed rows; nothing beyond the current row is kept.
pub struct CsvRows<'a> {
    headers: StringRecord,
    records: StringRecordsIntoIter<Cursor<&'a [u8]>>,
    row_count: usize,
}

pub fn parse_csv(text: &str) -> Result<CsvRows<'_>, IngestionError> {
    debug!("Creating CSV reader with headers enabled");
    let cursor = Cursor::new(text.as_bytes());
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(cursor);

    let headers = reader.headers()
        .map_err(|e| {
            error!("Failed to read CSV headers: {}", e);
            IngestionError::Parse(e.to_string())
        })?.clone();

    debug!("CSV headers: {:?}", headers);
    info!("Found {} columns in CSV", headers.len());

    Ok(CsvRows {
        headers,
        records: reader.into_records(),
        row_count: 0,
    })
}

impl CsvRows<'_> {
    pub fn rows_read(&self) -> usize {
        self.row_count
    }
}

impl Iterator for CsvRows<'_> {
    type Item = Result<CsvRow, IngestionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to read CSV record at row {}: {}", self.row_count + 1, e);
                return Some(Err(IngestionError::Parse(e.to_string())));
            }
        };

        self.row_count += 1;
        let row: CsvRow = self.headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), field.to_string()))
            .collect();

        if self.row_count % 1000 == 0 {
            debug!("Read {} CSV rows", self.row_count);
        }

        Some(Ok(row))
    }
}
