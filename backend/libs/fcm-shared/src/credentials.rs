use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::config::FcmConfig;
use crate::errors::FCMError;
use crate::models::{GoogleTokenResponse, JwtClaims, ServiceAccountKey};

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion. Google caps it at one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Short-lived OAuth2 bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Source of bearer tokens for the FCM API
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, FCMError>;
}

/// Mints access tokens from a service account key on disk.
///
/// Nothing is cached: each call reads the key file, signs a fresh assertion
/// and exchanges it at the key's `token_uri`.
pub struct ServiceAccountTokenProvider {
    credentials_path: PathBuf,
    scopes: Vec<String>,
    http_client: reqwest::Client,
}

impl ServiceAccountTokenProvider {
    pub fn new(credentials_path: impl Into<PathBuf>, scopes: Vec<String>) -> Self {
        Self::with_http_client(credentials_path, scopes, reqwest::Client::new())
    }

    pub fn with_http_client(
        credentials_path: impl Into<PathBuf>,
        scopes: Vec<String>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            scopes,
            http_client,
        }
    }

    pub fn from_config(config: &FcmConfig, http_client: reqwest::Client) -> Self {
        Self::with_http_client(
            config.credentials_path.clone(),
            config.scopes.clone(),
            http_client,
        )
    }

    /// Sign the JWT assertion presented to the token endpoint
    pub fn sign_assertion(&self, key: &ServiceAccountKey) -> Result<String, FCMError> {
        let now = Utc::now();
        let claims = JwtClaims {
            iss: key.client_email.clone(),
            scope: self.scopes.join(" "),
            aud: key.token_uri.clone(),
            exp: (now + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
            iat: now.timestamp(),
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = key.private_key_id.clone();

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| FCMError::KeyParseError(e.to_string()))?;

        encode(&header, &claims, &encoding_key)
            .map_err(|e| FCMError::JwtEncodeError(e.to_string()))
    }
}

/// Read and parse a service account key file
pub fn load_service_account_key(path: &Path) -> Result<ServiceAccountKey, FCMError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FCMError::CredentialsRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| FCMError::CredentialsParse {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, FCMError> {
        let key = load_service_account_key(&self.credentials_path)?;
        let assertion = self.sign_assertion(&key)?;

        tracing::debug!(
            token_uri = %key.token_uri,
            client_email = %key.client_email,
            "Requesting FCM access token"
        );

        let params = [
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ];

        let response = self
            .http_client
            .post(&key.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| FCMError::TokenError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(status = status.as_u16(), "Token endpoint rejected assertion");
            return Err(FCMError::TokenRequestFailed(status.as_u16(), error_text));
        }

        let token_response: GoogleTokenResponse = response
            .json()
            .await
            .map_err(|e| FCMError::TokenParseError(e.to_string()))?;

        tracing::debug!(
            expires_in = ?token_response.expires_in,
            token_type = ?token_response.token_type,
            "Obtained FCM access token"
        );

        Ok(AccessToken::new(token_response.access_token))
    }
}
