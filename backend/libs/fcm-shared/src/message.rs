//! Inbound relay events and the FCM v1 message envelope built from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Default Title";
pub const DEFAULT_BODY: &str = "Default Body";

/// Event payload handed to the relay. Every field is optional; missing or
/// `null` values fall back to the envelope defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    #[serde(default)]
    pub message: Option<InboundMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub notification: Option<InboundNotification>,
    #[serde(default)]
    pub data: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundNotification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// FCM Message Request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcmEnvelope {
    pub message: FcmMessageContent,
}

/// FCM Message Content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcmMessageContent {
    pub topic: String,
    pub notification: FcmNotification,
    pub data: BTreeMap<String, String>,
}

/// FCM Notification Payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

impl FcmEnvelope {
    /// Build the topic message for an inbound event, applying defaults for
    /// anything the event leaves out.
    pub fn from_event(event: &InboundEvent) -> Self {
        let message = event.message.as_ref();
        let notification = message.and_then(|m| m.notification.as_ref());

        Self {
            message: FcmMessageContent {
                topic: message
                    .and_then(|m| m.topic.clone())
                    .unwrap_or_default(),
                notification: FcmNotification {
                    title: notification
                        .and_then(|n| n.title.clone())
                        .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                    body: notification
                        .and_then(|n| n.body.clone())
                        .unwrap_or_else(|| DEFAULT_BODY.to_string()),
                },
                data: message.and_then(|m| m.data.clone()).unwrap_or_default(),
            },
        }
    }
}

impl From<&InboundEvent> for FcmEnvelope {
    fn from(event: &InboundEvent) -> Self {
        Self::from_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> InboundEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_event_uses_defaults() {
        let envelope = FcmEnvelope::from_event(&InboundEvent::default());

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "message": {
                    "topic": "",
                    "notification": {"title": "Default Title", "body": "Default Body"},
                    "data": {}
                }
            })
        );
    }

    #[test]
    fn test_explicit_fields_are_copied() {
        let envelope = FcmEnvelope::from_event(&event(json!({
            "message": {
                "topic": "news",
                "notification": {"title": "T", "body": "B"},
                "data": {"k": "v"}
            }
        })));

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "message": {
                    "topic": "news",
                    "notification": {"title": "T", "body": "B"},
                    "data": {"k": "v"}
                }
            })
        );
    }

    #[test]
    fn test_partial_notification_defaults_missing_half() {
        let only_title = FcmEnvelope::from_event(&event(json!({
            "message": {"topic": "alerts", "notification": {"title": "Heads up"}}
        })));
        assert_eq!(only_title.message.notification.title, "Heads up");
        assert_eq!(only_title.message.notification.body, DEFAULT_BODY);

        let only_body = FcmEnvelope::from_event(&event(json!({
            "message": {"notification": {"body": "Details"}}
        })));
        assert_eq!(only_body.message.notification.title, DEFAULT_TITLE);
        assert_eq!(only_body.message.notification.body, "Details");
        assert_eq!(only_body.message.topic, "");
    }

    #[test]
    fn test_null_fields_behave_like_missing() {
        let envelope = FcmEnvelope::from_event(&event(json!({
            "message": {
                "topic": null,
                "notification": {"title": null, "body": null},
                "data": null
            }
        })));

        assert_eq!(envelope, FcmEnvelope::from_event(&InboundEvent::default()));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let envelope = FcmEnvelope::from_event(&event(json!({
            "requestContext": {"requestId": "abc"},
            "message": {"topic": "news", "priority": "high"}
        })));

        assert_eq!(envelope.message.topic, "news");
    }

    #[test]
    fn test_builder_is_idempotent() {
        let inbound = event(json!({
            "message": {
                "topic": "news",
                "notification": {"title": "T"},
                "data": {"b": "2", "a": "1"}
            }
        }));

        let first = FcmEnvelope::from_event(&inbound);
        let second = FcmEnvelope::from(&inbound);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
