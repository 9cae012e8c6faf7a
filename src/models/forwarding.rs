//! Call forwarding (CFB, CFS) and black/white list (BWL) configuration.

use super::Wire;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Forward-on-busy targets. Unset targets are left untouched by the portal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cfb {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_all_calls_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_busy_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_unavailable_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_not_answer_phone: Option<String>,
    /// Seconds to ring before `forward_not_answer_phone` takes the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_not_answer_timeout: Option<u32>,
}

impl Wire for Cfb {}

/// Current CFB state of an abonent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfbResponse {
    pub status: String,
    #[serde(flatten)]
    pub forwarding: Cfb,
}

impl Wire for CfbResponse {}

/// A scheduled forwarding rule. `id` is assigned by the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfsRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub schedule: String,
    pub forward_to_phone: String,
}

impl Wire for CfsRule {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfsStatusResponse {
    pub status: String,
    #[serde(default)]
    pub rules: Vec<CfsRule>,
}

impl Wire for CfsStatusResponse {}

/// A black or white list rule. `id` is assigned by the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BwlRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub schedule: String,
    pub phone_list: Vec<String>,
}

impl Wire for BwlRule {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BwlStatusResponse {
    pub status: String,
    #[serde(default)]
    pub black_list: Vec<BwlRule>,
    #[serde(default)]
    pub white_list: Vec<BwlRule>,
}

impl Wire for BwlStatusResponse {}

/// Which list a BWL rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BwlType {
    Black,
    White,
}

impl fmt::Display for BwlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BwlType::Black => "BLACK",
            BwlType::White => "WHITE",
        })
    }
}
