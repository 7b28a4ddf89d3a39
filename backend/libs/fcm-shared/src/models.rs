use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub const MESSAGE_SENT: &str = "Message sent";
pub const UNABLE_TO_SEND: &str = "Unable to send message";

/// Outcome of one relay invocation, returned to the caller as
/// `{"status": .., "message": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub status: u16,
    pub message: String,
}

impl SendResult {
    /// Normalize an FCM response status. Only 200 counts as delivered;
    /// every other code is reported with the same failure text.
    pub fn from_status(status: u16) -> Self {
        let message = if status == 200 {
            MESSAGE_SENT
        } else {
            UNABLE_TO_SEND
        };

        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == 200
    }
}

/// Firebase Service Account Key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub auth_uri: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// JWT Claims for Google OAuth2
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

/// Google OAuth2 Token Response
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// FCM API Response
#[derive(Debug, Deserialize)]
pub struct FcmApiResponse {
    pub name: Option<String>,
}
