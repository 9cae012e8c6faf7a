//! Webhook subscriptions.

use crate::transport::Method;
use crate::{Client, Result, Subscription, SubscriptionRequest, SubscriptionResult, Wire};

impl Client {
    /// Register a webhook. The portal answers with the subscription id and
    /// its lifetime.
    pub fn create_subscription(&self, request: &SubscriptionRequest) -> Result<SubscriptionResult> {
        self.send_json(Method::Put, &["subscription"], request.to_wire()?)?
            .into_record()
    }

    /// Look up a webhook subscription.
    pub fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        self.call(
            Method::Get,
            &["subscription"],
            &[("subscriptionId", subscription_id.to_string())],
        )?
        .into_record()
    }

    /// Cancel a webhook subscription.
    pub fn stop_subscription(&self, subscription_id: &str) -> Result<()> {
        self.call(
            Method::Delete,
            &["subscription"],
            &[("subscriptionId", subscription_id.to_string())],
        )?;
        Ok(())
    }
}
