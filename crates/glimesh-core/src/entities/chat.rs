//! Chat message entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Channel, User};

/// A chat message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Option<String>,
    /// Raw message text
    pub message: Option<String>,
    /// Message split into text, emote and url tokens
    pub tokens: Option<Vec<ChatMessageToken>>,
    pub is_followed_message: Option<bool>,
    pub is_subscription_message: Option<bool>,
    pub metadata: Option<ChatMessageMetadata>,
    pub user: Option<User>,
    pub channel: Option<Box<Channel>>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl ChatMessage {
    /// Username of the sender, if selected
    #[must_use]
    pub fn sender(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }

    /// Rebuild the plain text from the tokens
    ///
    /// Emotes contribute their text form. Falls back to `message` when tokens
    /// were not requested.
    #[must_use]
    pub fn plain_text(&self) -> Option<String> {
        match &self.tokens {
            Some(tokens) => Some(tokens.iter().filter_map(ChatMessageToken::text).collect()),
            None => self.message.clone(),
        }
    }
}

/// Sender roles attached to a chat message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageMetadata {
    pub admin: Option<bool>,
    pub moderator: Option<bool>,
    pub platform_founder_subscriber: Option<bool>,
    pub platform_supporter_subscriber: Option<bool>,
    pub streamer: Option<bool>,
    pub subscriber: Option<bool>,
}

/// One token of a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatMessageToken {
    Text {
        text: Option<String>,
    },
    Emote {
        text: Option<String>,
        src: Option<String>,
    },
    Url {
        text: Option<String>,
        url: Option<String>,
    },
    /// Token kinds this client does not know about
    #[serde(other)]
    Unknown,
}

impl ChatMessageToken {
    /// Text form of the token
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } | Self::Emote { text, .. } | Self::Url { text, .. } => {
                text.as_deref()
            }
            Self::Unknown => None,
        }
    }
}
