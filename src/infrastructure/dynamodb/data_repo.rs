use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use std::collections::HashMap;
use tracing::{debug, error};
use crate::domain::{error::IngestionError, models::PerformanceRecord, ports::RecordRepository};

pub struct DynamoRecordRepository {
    client: Client,
}

impl DynamoRecordRepository {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

pub(crate) fn to_item(record: &PerformanceRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PerformanceRecord::PERFORMER.to_string(), AttributeValue::S(record.performer.clone())),
        (PerformanceRecord::DATE_STAGE.to_string(), AttributeValue::S(record.date_stage.clone())),
        (PerformanceRecord::START.to_string(), AttributeValue::S(record.start.clone())),
        (PerformanceRecord::END.to_string(), AttributeValue::S(record.end.clone())),
    ])
}

#[async_trait]
impl RecordRepository for DynamoRecordRepository {
    async fn upsert_record(&self, target_table: &str, record: &PerformanceRecord) -> Result<(), IngestionError> {
        debug!("Putting item {}/{} into {}", record.performer, record.date_stage, target_table);

        self.client
            .put_item()
            .table_name(target_table)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to put item into {}: {}", target_table, e);
                IngestionError::Database(e.to_string())
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_has_four_string_attributes() {
        let record = PerformanceRecord {
            performer: "Alice".to_string(),
            date_stage: "2024-01-01-MainStage".to_string(),
            start: "18:00".to_string(),
            end: "19:00".to_string(),
        };

        let item = to_item(&record);

        assert_eq!(item.len(), 4);
        assert_eq!(item["Performer"], AttributeValue::S("Alice".to_string()));
        assert_eq!(item["Date-Stage"], AttributeValue::S("2024-01-01-MainStage".to_string()));
        assert_eq!(item["Start"], AttributeValue::S("18:00".to_string()));
        assert_eq!(item["End"], AttributeValue::S("19:00".to_string()));
    }
}
