//! Call statistics records and the query used to page through them.

use super::{Abonent, Wire};
use crate::codec::{self, epoch_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u32 = 100;

/// One call from the `statistics` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    pub phone: String,
    pub direction: String,
    pub status: String,
    #[serde(with = "epoch_millis")]
    pub start_date: DateTime<Utc>,
    #[serde(
        default,
        with = "epoch_millis::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub answer_date: Option<DateTime<Utc>>,
    /// Call length in milliseconds.
    pub duration: i64,
    pub abonent: Abonent,
}

impl Wire for StatRecord {}

/// One call from the `v2/statistics` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecordV2 {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    pub phone_from: String,
    pub phone_to: String,
    pub direction: String,
    pub status: String,
    #[serde(with = "epoch_millis")]
    pub start_date: DateTime<Utc>,
    #[serde(
        default,
        with = "epoch_millis::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub answer_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_millis::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abonent: Option<Abonent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Wire for StatRecordV2 {}

/// Filter and page for the statistics endpoints.
///
/// # Examples
/// ```
/// use beeline_portal::StatisticsQuery;
/// use chrono::{TimeZone, Utc};
///
/// let query = StatisticsQuery::new(
///     "9379992@beeline.ru",
///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap(),
/// )
/// .page(2)
/// .page_size(50);
/// assert_eq!(query.params()[1], ("dateFrom", "2024-01-01T00:00:00Z".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    user_id: String,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    page: u32,
    page_size: u32,
}

impl StatisticsQuery {
    /// Query the first page of 100 calls for `user_id` between two instants.
    pub fn new(user_id: impl Into<String>, date_from: DateTime<Utc>, date_to: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            date_from,
            date_to,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Zero-based page index.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Query parameters in the order the portal documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("userId", self.user_id.clone()),
            ("dateFrom", codec::format_query_datetime(&self.date_from)),
            ("dateTo", codec::format_query_datetime(&self.date_to)),
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}
