//! Push Relay
//!
//! Lambda function that turns an inbound notification event into an FCM
//! topic message and reports the send outcome as `{status, message}`.

pub mod config;
pub mod error;
pub mod handler;

pub use config::Config;
pub use error::RelayError;
pub use handler::handle_event;
