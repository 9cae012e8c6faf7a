//! Portal operations, grouped by resource. Each file adds methods to
//! [`Client`](crate::Client).

mod abonents;
mod campaigns;
mod forwarding;
mod icr;
mod numbers;
mod records;
mod statistics;
mod subscriptions;
