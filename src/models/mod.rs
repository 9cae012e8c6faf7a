//! Records exchanged with the portal.
//!
//! Every record maps between the portal's camelCase JSON and Rust fields
//! through serde. Optional fields deserialize from a missing key or `null`,
//! and are left out of outgoing JSON when unset.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

mod abonent;
mod campaign;
mod forwarding;
mod icr;
mod record;
mod statistics;
mod subscription;

pub use abonent::{Abonent, AgentStatus, Number};
pub use campaign::{
    Answer, CampaignType, DateAndTime, UploadedFile, VoiceCampaign, VoiceCampaignInfoReport,
    VoiceCampaignMessage, VoiceCampaignNumber, VoiceCampaignQuestion, VoiceCampaignSchedule,
};
pub use forwarding::{
    BwlRule, BwlStatusResponse, BwlType, Cfb, CfbResponse, CfsRule, CfsStatusResponse,
};
pub use icr::{IcrNumberResult, IcrRouteResult, IcrRouteRule};
pub use record::CallRecord;
pub use statistics::{StatRecord, StatRecordV2, StatisticsQuery};
pub use subscription::{Subscription, SubscriptionRequest, SubscriptionResult, SubscriptionType};

/// Mapping between a record and its wire JSON.
///
/// Missing required keys surface as [`Error::Json`](crate::Error::Json).
pub trait Wire: Serialize + DeserializeOwned {
    /// Build the record from a portal JSON value.
    fn from_wire(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode the record as portal JSON, omitting unset optional fields.
    fn to_wire(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Error object returned by the portal, both as a failed response body and
/// embedded in per-item ICR results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Wire for ErrorInfo {}

/// `errorCode` arrives either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
}

impl ErrorCode {
    /// The code as a number, if it is one or is a string holding one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ErrorCode::Number(code) => Some(*code),
            ErrorCode::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Number(code) => write!(f, "{code}"),
            ErrorCode::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Wire;
    use pretty_assertions::assert_eq;
    use std::fmt::Debug;

    /// Encode, decode, and compare.
    pub(crate) fn assert_round_trip<T: Wire + PartialEq + Debug>(record: &T) {
        let wire = record.to_wire().unwrap();
        let decoded = T::from_wire(wire).unwrap();
        assert_eq!(&decoded, record);
    }

    /// Keys present in the encoded object.
    pub(crate) fn wire_keys<T: Wire>(record: &T) -> Vec<String> {
        let wire = record.to_wire().unwrap();
        let mut keys: Vec<String> = wire.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}
