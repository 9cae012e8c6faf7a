use super::{Abonent, Wire};
use crate::codec::epoch_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a recorded call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub call_id: String,
    pub phone: String,
    pub direction: String,
    #[serde(with = "epoch_millis")]
    pub date: DateTime<Utc>,
    /// Call length in milliseconds.
    pub duration: i64,
    /// Size of the audio file in bytes.
    pub file_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub abonent: Abonent,
}

impl Wire for CallRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{assert_round_trip, wire_keys};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record_json() -> serde_json::Value {
        json!({
            "id": "rec-1",
            "callId": "call-1",
            "phone": "+79001234567",
            "direction": "INBOUND",
            "date": 1_600_000_000_123_i64,
            "duration": 65_000,
            "fileSize": 1024,
            "abonent": {
                "userId": "9379992@beeline.ru",
                "phone": "9379992",
                "firstName": "T",
                "lastName": "U"
            }
        })
    }

    #[test]
    fn call_record_reads_epoch_millis_and_nested_abonent() {
        let record = CallRecord::from_wire(record_json()).unwrap();

        assert_eq!(record.date.timestamp_millis(), 1_600_000_000_123);
        assert_eq!(record.abonent.first_name, "T");
        assert_eq!(record.external_id, None);
        assert_eq!(record.to_wire().unwrap(), record_json());
    }

    #[test]
    fn call_record_round_trips_with_optionals() {
        let mut record = CallRecord::from_wire(record_json()).unwrap();
        assert_round_trip(&record);

        record.external_id = Some("ext-9".into());
        record.comment = Some("callback".into());
        record.abonent.email = Some("u@example.com".into());
        assert!(wire_keys(&record).contains(&"externalId".to_string()));
        assert_round_trip(&record);
    }
}
