//! Turns raw frames into events

use super::ActiveSubscription;
use crate::error::ProtocolError;
use crate::events::{EventName, GlimeshEvent};
use crate::operations::SubscriptionKind;
use crate::protocol::{Envelope, PhxEvent, RefKind, ReplyRef};
use serde_json::{json, Value};

/// Classifies inbound frames and tracks acknowledged subscriptions
#[derive(Debug, Default)]
pub struct GlimeshParser {
    subscriptions: Vec<ActiveSubscription>,
}

impl GlimeshParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw text frame and classify it
    pub fn parse_data(&mut self, raw: &str) -> Result<GlimeshEvent, ProtocolError> {
        let envelope = Envelope::from_json(raw)?;
        Ok(self.classify(envelope))
    }

    /// Classify a decoded frame
    ///
    /// Errors win over everything else, then the reply reference decides,
    /// then subscription pushes are matched by topic.
    pub fn classify(&mut self, envelope: Envelope) -> GlimeshEvent {
        let reference = envelope.reference.clone();

        if let Some(errors) = find_errors(&envelope) {
            tracing::debug!(
                reference = ?reference,
                topic = %envelope.topic,
                "API replied with errors"
            );
            return GlimeshEvent::error(errors).with_reference(reference);
        }

        let known_ref = reference.as_deref().and_then(ReplyRef::from_str);
        match known_ref {
            Some(reply_ref) => self.handle_reply(reply_ref, &envelope).with_reference(reference),
            None => self.handle_data(envelope),
        }
    }

    /// Subscriptions acknowledged so far, in arrival order
    pub fn active_subscriptions(&self) -> &[ActiveSubscription] {
        &self.subscriptions
    }

    /// Forget all subscriptions
    pub fn reset(&mut self) {
        self.subscriptions.clear();
    }

    fn handle_reply(&mut self, reply_ref: ReplyRef, envelope: &Envelope) -> GlimeshEvent {
        match reply_ref.kind() {
            RefKind::Control => GlimeshEvent::new(reply_ref.event_name(), Value::Null),
            RefKind::Subscription(kind) => self.register(kind, envelope),
            RefKind::Mutation(_) | RefKind::Query(_) => GlimeshEvent::new(
                reply_ref.event_name(),
                envelope
                    .payload_at(&["response", "data"])
                    .cloned()
                    .unwrap_or(Value::Null),
            ),
        }
    }

    fn register(&mut self, kind: SubscriptionKind, envelope: &Envelope) -> GlimeshEvent {
        let Some(id) = envelope
            .payload_at(&["response", "subscriptionId"])
            .and_then(Value::as_str)
        else {
            tracing::warn!(
                subscription = %kind,
                "Subscription reply carried no subscription id"
            );
            return GlimeshEvent::unknown(envelope.payload.clone());
        };

        tracing::debug!(subscription = %kind, subscription_id = %id, "Subscription acknowledged");
        self.subscriptions.push(ActiveSubscription::new(kind, id));
        GlimeshEvent::new(kind.ready_event(), json!({ "subscriptionId": id }))
    }

    fn handle_data(&self, envelope: Envelope) -> GlimeshEvent {
        if envelope.event != PhxEvent::SubscriptionData {
            return GlimeshEvent::unknown(envelope.payload);
        }

        match self.subscriptions.iter().find(|s| s.matches(&envelope.topic)) {
            Some(subscription) => GlimeshEvent::new(
                subscription.kind.data_event(),
                envelope
                    .payload_at(&["result", "data"])
                    .cloned()
                    .unwrap_or(Value::Null),
            ),
            None => {
                tracing::debug!(topic = %envelope.topic, "Push for an unknown subscription");
                GlimeshEvent::unknown(envelope.payload)
            }
        }
    }
}

/// Errors carried by a frame, if any
fn find_errors(envelope: &Envelope) -> Option<Value> {
    for path in [["response", "errors"], ["result", "errors"]] {
        if let Some(errors) = envelope.payload_at(&path) {
            if errors.as_array().is_some_and(|e| !e.is_empty()) {
                return Some(errors.clone());
            }
        }
    }

    if envelope.reply_status() == Some("error") {
        return Some(
            envelope
                .payload
                .get("response")
                .cloned()
                .unwrap_or_else(|| envelope.payload.clone()),
        );
    }

    if envelope.event == PhxEvent::Error {
        return Some(envelope.payload.clone());
    }

    None
}
