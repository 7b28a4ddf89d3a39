/// FCM Shared Library
///
/// Firebase Cloud Messaging (FCM) building blocks for relaying a single
/// topic notification through the HTTP v1 send API.
///
/// It handles:
/// - OAuth2 access tokens minted from a Google service-account key
/// - Shaping inbound events into FCM message envelopes
/// - Authenticated delivery and status normalization

pub mod client;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod message;
pub mod models;

pub use client::{FCMClient, MessageSender};
pub use config::FcmConfig;
pub use credentials::{AccessToken, ServiceAccountTokenProvider, TokenProvider};
pub use errors::FCMError;
pub use message::{FcmEnvelope, InboundEvent};
pub use models::{SendResult, ServiceAccountKey};
