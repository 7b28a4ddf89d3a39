use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::FcmConfig;
use crate::credentials::{ServiceAccountTokenProvider, TokenProvider};
use crate::errors::FCMError;
use crate::message::FcmEnvelope;
use crate::models::{FcmApiResponse, SendResult};

pub const FCM_CONTENT_TYPE: &str = "application/json; UTF-8";

/// Delivers a built envelope and reports the normalized outcome
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, envelope: &FcmEnvelope) -> Result<SendResult, FCMError>;
}

/// Firebase Cloud Messaging Client
///
/// Posts one topic message per call to the HTTP v1 API, fetching a new
/// access token from its provider every time.
pub struct FCMClient<P = ServiceAccountTokenProvider> {
    config: FcmConfig,
    token_provider: P,
    http_client: reqwest::Client,
}

impl FCMClient<ServiceAccountTokenProvider> {
    /// Create new FCM client backed by the configured service account key
    pub fn from_config(config: FcmConfig) -> Self {
        let http_client = reqwest::Client::new();
        let token_provider =
            ServiceAccountTokenProvider::from_config(&config, http_client.clone());
        Self::with_http_client(config, token_provider, http_client)
    }
}

impl<P: TokenProvider> FCMClient<P> {
    pub fn new(config: FcmConfig, token_provider: P) -> Self {
        Self::with_http_client(config, token_provider, reqwest::Client::new())
    }

    pub fn with_http_client(
        config: FcmConfig,
        token_provider: P,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            config,
            token_provider,
            http_client,
        }
    }

    pub fn config(&self) -> &FcmConfig {
        &self.config
    }
}

#[async_trait]
impl<P: TokenProvider> MessageSender for FCMClient<P> {
    async fn send(&self, envelope: &FcmEnvelope) -> Result<SendResult, FCMError> {
        let access_token = self.token_provider.access_token().await?;

        let body = serde_json::to_vec(envelope)
            .map_err(|e| FCMError::EnvelopeEncodeError(e.to_string()))?;
        let url = self.config.endpoint();

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, access_token.bearer())
            .header(CONTENT_TYPE, FCM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| FCMError::SendRequestError(e.to_string()))?;

        let status = response.status();
        let result = SendResult::from_status(status.as_u16());

        if result.is_sent() {
            // Message name is informational only.
            let message_name = response
                .json::<FcmApiResponse>()
                .await
                .ok()
                .and_then(|r| r.name)
                .unwrap_or_default();
            tracing::info!(
                topic = %envelope.message.topic,
                message_name = %message_name,
                "Message sent to Firebase for delivery"
            );
        } else {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                topic = %envelope.message.topic,
                endpoint = %url,
                response = %error_text,
                "FCM rejected message"
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::AccessToken;
    use crate::message::InboundEvent;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct StaticToken(&'static str);

    #[async_trait]
    impl TokenProvider for StaticToken {
        async fn access_token(&self) -> Result<AccessToken, FCMError> {
            Ok(AccessToken::new(self.0))
        }
    }

    struct FailingToken;

    #[async_trait]
    impl TokenProvider for FailingToken {
        async fn access_token(&self) -> Result<AccessToken, FCMError> {
            Err(FCMError::TokenRequestFailed(401, "invalid_grant".to_string()))
        }
    }

    fn news_envelope() -> FcmEnvelope {
        let event: InboundEvent = serde_json::from_value(json!({
            "message": {
                "topic": "news",
                "notification": {"title": "T", "body": "B"},
                "data": {"k": "v"}
            }
        }))
        .unwrap();
        FcmEnvelope::from_event(&event)
    }

    fn client_for(server: &MockServer) -> FCMClient<StaticToken> {
        FCMClient::new(
            FcmConfig::new("test-project").with_base_url(server.uri()),
            StaticToken("ya29.test"),
        )
    }

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/test-project/messages:send"))
            .and(header("authorization", "Bearer ya29.test"))
            .and(header("content-type", "application/json; UTF-8"))
            .and(body_json(json!({
                "message": {
                    "topic": "news",
                    "notification": {"title": "T", "body": "B"},
                    "data": {"k": "v"}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/test-project/messages/0:1500415314455276%31bd1c9631bd1c96"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).send(&news_envelope()).await.unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": 200, "message": "Message sent"})
        );
    }

    #[tokio::test]
    async fn test_send_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).send(&news_envelope()).await.unwrap();

        assert_eq!(result, SendResult::from_status(404));
        assert_eq!(result.message, "Unable to send message");
    }

    #[tokio::test]
    async fn test_send_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).send(&news_envelope()).await.unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": 500, "message": "Unable to send message"})
        );
    }

    #[tokio::test]
    async fn test_success_with_unexpected_body_still_counts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).send(&news_envelope()).await.unwrap();

        assert!(result.is_sent());
    }

    #[tokio::test]
    async fn test_token_failure_skips_send() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = FCMClient::new(
            FcmConfig::new("test-project").with_base_url(server.uri()),
            FailingToken,
        );

        let err = client.send(&news_envelope()).await.unwrap_err();
        assert!(matches!(err, FCMError::TokenRequestFailed(401, _)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        // Nothing listens on the discard port.
        let client = FCMClient::new(
            FcmConfig::new("test-project").with_base_url("http://127.0.0.1:9"),
            StaticToken("ya29.test"),
        );

        let err = client.send(&news_envelope()).await.unwrap_err();
        assert!(matches!(err, FCMError::SendRequestError(_)));
    }
}
