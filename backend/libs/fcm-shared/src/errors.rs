use std::path::PathBuf;

use thiserror::Error;

/// FCM Client Error Types
///
/// Every variant is fatal to the invocation. Non-200 responses from the send
/// endpoint are not errors; they come back as a [`crate::SendResult`].
#[derive(Error, Debug)]
pub enum FCMError {
    #[error("Failed to read service account file {path}: {source}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse service account file {path}: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse private key: {0}")]
    KeyParseError(String),

    #[error("Failed to encode JWT: {0}")]
    JwtEncodeError(String),

    #[error("Failed to get access token: {0}")]
    TokenError(String),

    #[error("Token request failed with status: {0} - {1}")]
    TokenRequestFailed(u16, String),

    #[error("Failed to parse token response: {0}")]
    TokenParseError(String),

    #[error("Failed to encode FCM message: {0}")]
    EnvelopeEncodeError(String),

    #[error("FCM send request failed: {0}")]
    SendRequestError(String),
}
