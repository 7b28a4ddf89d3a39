use fcm_shared::{FcmEnvelope, InboundEvent, MessageSender, SendResult};
use serde_json::Value;

use crate::error::{RelayError, Result};

/// Decode the raw Lambda payload into an inbound event
pub fn parse_event(payload: Value) -> Result<InboundEvent> {
    serde_json::from_value(payload).map_err(RelayError::InvalidEvent)
}

/// Relay one inbound event to FCM.
///
/// Non-200 responses come back as a `SendResult`; credential, token and
/// transport failures are returned as errors.
pub async fn handle_event(payload: Value, sender: &dyn MessageSender) -> Result<SendResult> {
    let event = parse_event(payload)?;
    let envelope = FcmEnvelope::from_event(&event);

    if let Ok(body) = serde_json::to_string_pretty(&envelope) {
        tracing::info!(
            topic = %envelope.message.topic,
            "FCM request body for message using common notification object:\n{}",
            body
        );
    }

    let result = sender.send(&envelope).await?;

    tracing::info!(
        status = result.status,
        outcome = %result.message,
        "Relay finished"
    );

    Ok(result)
}
