//! Frame envelope
//!
//! `[join_ref, ref, topic, event, payload]`

use super::{PhxEvent, Topic};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single frame sent to or received from the API
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Id chosen by the client when joining. Null on server pushes
    pub join_ref: Option<String>,
    /// Echoed back in the reply to a request. Null on subscription pushes
    pub reference: Option<String>,
    /// Topic; for subscription pushes this contains the subscription id
    pub topic: String,
    pub event: PhxEvent,
    pub payload: Value,
}

impl Envelope {
    /// Create an outbound request frame
    #[must_use]
    pub fn request(
        join_ref: impl Into<String>,
        reference: impl Into<String>,
        topic: Topic,
        event: PhxEvent,
        payload: Value,
    ) -> Self {
        Self {
            join_ref: Some(join_ref.into()),
            reference: Some(reference.into()),
            topic: topic.into(),
            event,
            payload,
        }
    }

    /// Look up a value inside the payload by a chain of object keys
    #[must_use]
    pub fn payload_at(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.payload, |value, key| value.get(key))
    }

    /// Status of a `phx_reply` (`"ok"` or `"error"`)
    #[must_use]
    pub fn reply_status(&self) -> Option<&str> {
        if self.event != PhxEvent::Reply {
            return None;
        }
        self.payload.get("status").and_then(Value::as_str)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Serialize for Envelope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(5)?;
        tuple.serialize_element(&self.join_ref)?;
        tuple.serialize_element(&self.reference)?;
        tuple.serialize_element(&self.topic)?;
        tuple.serialize_element(&self.event)?;
        tuple.serialize_element(&self.payload)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (join_ref, reference, topic, event, payload): (
            Option<String>,
            Option<String>,
            String,
            PhxEvent,
            Value,
        ) = Deserialize::deserialize(deserializer)
            .map_err(|e: D::Error| de::Error::custom(format!("invalid envelope: {e}")))?;

        Ok(Self {
            join_ref,
            reference,
            topic,
            event,
            payload,
        })
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Envelope(topic={}, event={}", self.topic, self.event)?;
        if let Some(reference) = &self.reference {
            write!(f, ", ref={reference}")?;
        }
        write!(f, ")")
    }
}
