//! # Beeline Portal
//! Blocking wrapper around the Beeline Cloud PBX portal HTTP API. It covers call control, abonent (extension) management, call forwarding and black/white lists, call records, statistics, voice campaigns and webhook subscriptions, through [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust services that integrate with a Beeline cloud PBX: CRM click-to-call, call-record archiving, statistics export, or scripted forwarding changes. Configure with [`ClientBuilder`], then call the operation you need; every operation is one request-response round trip that returns typed records.
//!
//! ## Runtime requirements
//! Synchronous; HTTP calls use `reqwest`'s blocking client, so do not call it from inside an async runtime's worker threads. Requests are logged through `tracing` at `debug` level and failures at `warn`; install any subscriber to see them.
//!
//! ## Out of scope
//! No retries, rate limiting, pagination helpers, caching, or webhook delivery verification. Statistics are fetched one page at a time with [`StatisticsQuery`].
//!
//! ## Errors
//! Every operation returns the crate-wide [`Result`]. A response status above 204 becomes [`Error::Api`] with the portal's error code and description; a connect failure or timeout becomes [`Error::Api`] with code 500. [`Error::code`] and [`Error::description`] work on every variant.
//!
//! ## Example
//! ```no_run
//! use beeline_portal::{Cfb, Client};
//!
//! fn main() -> Result<(), beeline_portal::Error> {
//!     let client = Client::new("my-api-token")?;
//!
//!     for abonent in client.get_abonents()? {
//!         println!("{}: {} {}", abonent.user_id, abonent.first_name, abonent.last_name);
//!     }
//!
//!     let cfb = Cfb {
//!         forward_busy_phone: Some("+79001234567".to_string()),
//!         ..Cfb::default()
//!     };
//!     client.enable_cfb("2310", &cfb)?;
//!
//!     let call_id = client.call_from_abonent("2310", "+79007654321")?;
//!     println!("Started call {call_id}");
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod codec;
mod error;
mod models;
mod transport;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{
    Abonent, AgentStatus, Answer, BwlRule, BwlStatusResponse, BwlType, CallRecord, CampaignType,
    Cfb, CfbResponse, CfsRule, CfsStatusResponse, DateAndTime, ErrorCode, ErrorInfo,
    IcrNumberResult, IcrRouteResult, IcrRouteRule, Number, StatRecord, StatRecordV2,
    StatisticsQuery, Subscription, SubscriptionRequest, SubscriptionResult, SubscriptionType,
    UploadedFile, VoiceCampaign, VoiceCampaignInfoReport, VoiceCampaignMessage,
    VoiceCampaignNumber, VoiceCampaignQuestion, VoiceCampaignSchedule, Wire,
};
pub use transport::{Method, Payload, Reply};

/// Result type alias for portal operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
