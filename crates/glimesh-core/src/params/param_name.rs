//! Parameter names understood by the Glimesh API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the params that may be passed to a query, subscription or mutation
///
/// The string form is the GraphQL argument name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamName {
    /// Unique channel identifier
    ChannelId,
    /// Unique user identifier
    UserId,
    /// Same as a user id, for the user that owns a channel
    StreamerId,
    StreamerUsername,
    Username,
    /// Generic object id
    Id,
    /// Chat message body
    Message,
    MessageId,
    EnableNotifications,
    Title,
    /// Category slug
    Name,
    CategorySlug,
    Status,
    // Pagination
    First,
    Last,
    After,
    Before,
}

impl ParamName {
    /// Get the GraphQL argument name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChannelId => "channelId",
            Self::UserId => "userId",
            Self::StreamerId => "streamerId",
            Self::StreamerUsername => "streamerUsername",
            Self::Username => "username",
            Self::Id => "id",
            Self::Message => "message",
            Self::MessageId => "messageId",
            Self::EnableNotifications => "enableNotifications",
            Self::Title => "title",
            Self::Name => "name",
            Self::CategorySlug => "categorySlug",
            Self::Status => "status",
            Self::First => "first",
            Self::Last => "last",
            Self::After => "after",
            Self::Before => "before",
        }
    }

    /// Parse a param name from its GraphQL argument name
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "channelId" => Some(Self::ChannelId),
            "userId" => Some(Self::UserId),
            "streamerId" => Some(Self::StreamerId),
            "streamerUsername" => Some(Self::StreamerUsername),
            "username" => Some(Self::Username),
            "id" => Some(Self::Id),
            "message" => Some(Self::Message),
            "messageId" => Some(Self::MessageId),
            "enableNotifications" => Some(Self::EnableNotifications),
            "title" => Some(Self::Title),
            "name" => Some(Self::Name),
            "categorySlug" => Some(Self::CategorySlug),
            "status" => Some(Self::Status),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "after" => Some(Self::After),
            "before" => Some(Self::Before),
            _ => None,
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_name_as_str() {
        assert_eq!(ParamName::ChannelId.as_str(), "channelId");
        assert_eq!(ParamName::StreamerUsername.as_str(), "streamerUsername");
        assert_eq!(ParamName::Before.as_str(), "before");
    }

    #[test]
    fn test_param_name_from_str() {
        assert_eq!(ParamName::from_str("userId"), Some(ParamName::UserId));
        assert_eq!(ParamName::from_str("categorySlug"), Some(ParamName::CategorySlug));
        assert_eq!(ParamName::from_str("user_id"), None);
    }

    #[test]
    fn test_param_name_serialization() {
        let json = serde_json::to_string(&ParamName::EnableNotifications).unwrap();
        assert_eq!(json, "\"enableNotifications\"");

        let parsed: ParamName = serde_json::from_str("\"messageId\"").unwrap();
        assert_eq!(parsed, ParamName::MessageId);
    }
}
