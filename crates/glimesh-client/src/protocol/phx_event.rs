//! Phoenix channel event names

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Event field of a frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhxEvent {
    Close,
    Error,
    Join,
    Reply,
    Leave,
    Heartbeat,
    /// Absinthe GraphQL document (client only)
    Doc,
    /// Absinthe subscription push (server only)
    SubscriptionData,
    /// Any event this client does not know about
    Other(String),
}

impl PhxEvent {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Close => "phx_close",
            Self::Error => "phx_error",
            Self::Join => "phx_join",
            Self::Reply => "phx_reply",
            Self::Leave => "phx_leave",
            Self::Heartbeat => "heartbeat",
            Self::Doc => "doc",
            Self::SubscriptionData => "subscription:data",
            Self::Other(s) => s,
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "phx_close" => Self::Close,
            "phx_error" => Self::Error,
            "phx_join" => Self::Join,
            "phx_reply" => Self::Reply,
            "phx_leave" => Self::Leave,
            "heartbeat" => Self::Heartbeat,
            "doc" => Self::Doc,
            "subscription:data" => Self::SubscriptionData,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for PhxEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhxEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

impl fmt::Display for PhxEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_events() {
        assert_eq!(PhxEvent::parse("phx_reply"), PhxEvent::Reply);
        assert_eq!(PhxEvent::parse("subscription:data"), PhxEvent::SubscriptionData);
        assert_eq!(PhxEvent::parse("heartbeat"), PhxEvent::Heartbeat);
    }

    #[test]
    fn test_unknown_event_is_kept() {
        let event = PhxEvent::parse("presence_diff");
        assert_eq!(event, PhxEvent::Other("presence_diff".to_string()));
        assert_eq!(event.as_str(), "presence_diff");
    }

    #[test]
    fn test_event_serialization() {
        assert_eq!(serde_json::to_string(&PhxEvent::Join).unwrap(), "\"phx_join\"");
        let event: PhxEvent = serde_json::from_str("\"doc\"").unwrap();
        assert_eq!(event, PhxEvent::Doc);
    }
}
