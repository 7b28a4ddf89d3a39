use fcm_shared::FCMError;
use thiserror::Error;

/// Failures that abort an invocation instead of producing a send result
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("invalid relay event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error(transparent)]
    Delivery(#[from] FCMError),
}

pub type Result<T> = std::result::Result<T, RelayError>;
