//! Voice campaigns: automated outbound calls playing a message or asking a
//! question, with a calling schedule and a per-number progress report.

use super::{Abonent, Wire};
use crate::codec::calendar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    Message,
    Question,
}

/// Maps a keypad choice to the action taken for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub choice: String,
    pub answer: String,
}

impl Wire for Answer {}

/// When and how often numbers are dialled.
///
/// The portal exchanges the counters as strings. Numeric values are accepted
/// on input and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCampaignSchedule {
    /// Attempts per number.
    #[serde(deserialize_with = "text_or_number")]
    pub try_quantity: String,
    #[serde(deserialize_with = "text_or_number")]
    pub from_hour: String,
    #[serde(deserialize_with = "text_or_number")]
    pub to_hour: String,
    pub schedule: String,
}

impl Wire for VoiceCampaignSchedule {}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

/// A campaign boundary: calendar date plus a wall-clock time string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateAndTime {
    #[serde(with = "calendar")]
    pub date: DateTime<Utc>,
    pub time: String,
}

impl Wire for DateAndTime {}

/// A campaign as listed by the portal, also used to update one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCampaign {
    pub name: String,
    pub status: String,
    pub record_id: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub audio_file: String,
    pub phones: Vec<String>,
    pub phone_number: String,
    pub schedule: VoiceCampaignSchedule,
    pub from: DateAndTime,
    pub to: DateAndTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<Answer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abonent: Option<Abonent>,
}

impl Wire for VoiceCampaign {}

/// New campaign that plays an audio message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCampaignMessage {
    pub name: String,
    /// Id returned by [`Client::upload_voice_campaign_audio`](crate::Client::upload_voice_campaign_audio).
    pub audio_file: String,
    pub phones: Vec<String>,
    /// Caller id shown to the dialled numbers.
    pub phone_number: String,
    pub schedule: VoiceCampaignSchedule,
    pub from: DateAndTime,
    pub to: DateAndTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abonent: Option<Abonent>,
}

impl Wire for VoiceCampaignMessage {}

/// New campaign that asks a question and acts on the keypad answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCampaignQuestion {
    pub name: String,
    pub answers: Vec<Answer>,
    pub audio_file: String,
    pub phones: Vec<String>,
    pub phone_number: String,
    pub schedule: VoiceCampaignSchedule,
    pub from: DateAndTime,
    pub to: DateAndTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abonent: Option<Abonent>,
}

impl Wire for VoiceCampaignQuestion {}

/// Progress of a single dialled number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCampaignNumber {
    pub phone: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub try_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(
        default,
        with = "calendar::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_call_date: Option<DateTime<Utc>>,
}

impl Wire for VoiceCampaignNumber {}

/// Aggregate report of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCampaignInfoReport {
    pub name: String,
    pub status: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    #[serde(default)]
    pub numbers: Vec<VoiceCampaignNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abonent: Option<Abonent>,
}

impl Wire for VoiceCampaignInfoReport {}

/// Audio file stored by the portal for later use in a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
}

impl Wire for UploadedFile {}
