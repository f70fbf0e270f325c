//! Subscriptions acknowledged by the API

use crate::operations::SubscriptionKind;
use serde::Serialize;

/// A subscription the API has acknowledged
///
/// Data for it arrives on a topic that contains `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSubscription {
    pub kind: SubscriptionKind,
    pub id: String,
}

impl ActiveSubscription {
    pub fn new(kind: SubscriptionKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    /// Whether a push on `topic` belongs to this subscription
    #[must_use]
    pub fn matches(&self, topic: &str) -> bool {
        !self.id.is_empty() && topic.contains(self.id.as_str())
    }
}
