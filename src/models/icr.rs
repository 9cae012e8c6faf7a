//! Incoming-call routing.

use super::{ErrorInfo, Wire};
use serde::{Deserialize, Serialize};

/// Per-number outcome of enabling or disabling ICR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcrNumberResult {
    pub phone_number: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl Wire for IcrNumberResult {}

/// Routes calls on an inbound number to an extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcrRouteRule {
    pub inbound_number: String,
    pub extension: String,
}

impl Wire for IcrRouteRule {}

/// Per-rule outcome of a bulk route change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcrRouteResult {
    pub rule: IcrRouteRule,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl Wire for IcrRouteResult {}
