//! Webhook subscriptions.

use super::Wire;
use serde::{Deserialize, Serialize};

/// Which call events the portal posts to the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionType {
    BasicCall,
    AdvancedCall,
}

/// Body of a subscription request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    /// Abonent id, phone or extension the subscription targets.
    pub pattern: String,
    /// Lifetime in seconds.
    pub expires: i64,
    pub subscription_type: SubscriptionType,
    pub url: String,
}

impl Wire for SubscriptionRequest {}

/// A registered subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: String,
    pub target_type: String,
    pub target_id: String,
    pub subscription_type: SubscriptionType,
    pub expires: i64,
    pub url: String,
}

impl Wire for Subscription {}

/// Returned when a subscription is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResult {
    pub subscription_id: String,
    pub expires: i64,
}

impl Wire for SubscriptionResult {}
