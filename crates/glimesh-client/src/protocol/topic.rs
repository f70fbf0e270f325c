//! Channel topics the client sends to

use std::fmt;

/// Topics used by outbound requests
///
/// Inbound frames may carry any topic string; subscription data arrives on a
/// topic named after the subscription id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Absinthe control channel: joins and GraphQL documents
    Control,
    /// Phoenix system topic: heartbeats
    Phoenix,
}

impl Topic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Control => "__absinthe__:control",
            Self::Phoenix => "phoenix",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "__absinthe__:control" => Some(Self::Control),
            "phoenix" => Some(Self::Phoenix),
            _ => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.as_str().to_string()
    }
}
