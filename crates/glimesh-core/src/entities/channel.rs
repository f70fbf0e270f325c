//! Channel entity - a streamer's channel

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Category, ChannelBan, ChannelModerationLog, Stream, Subcategory, Tag, User};

/// Live status of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelStatus {
    Live,
    Offline,
}

impl ChannelStatus {
    /// Get the GraphQL enum literal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Offline => "OFFLINE",
        }
    }
}

/// A Glimesh channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: Option<String>,
    pub title: Option<String>,
    pub status: Option<ChannelStatus>,
    pub language: Option<String>,
    pub mature_content: Option<bool>,
    pub inaccessible: Option<bool>,
    pub show_on_homepage: Option<bool>,
    pub block_links: Option<bool>,
    pub disable_hyperlinks: Option<bool>,
    pub require_confirmed_email: Option<bool>,
    pub show_recent_chat_messages_only: Option<bool>,
    /// Minimum account age in hours required to chat
    pub minimum_account_age: Option<i64>,
    pub chat_bg_url: Option<String>,
    pub chat_rules_md: Option<String>,
    pub chat_rules_html: Option<String>,
    pub poster_url: Option<String>,
    pub stream: Option<Box<Stream>>,
    pub streamer: Option<Box<User>>,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub tags: Option<Vec<Tag>>,
    pub bans: Option<Vec<ChannelBan>>,
    pub moderation_logs: Option<Vec<ChannelModerationLog>>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Channel {
    /// Whether the channel is currently live
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status == Some(ChannelStatus::Live)
    }

    /// Viewer count of the current stream, if requested
    #[must_use]
    pub fn viewer_count(&self) -> Option<i64> {
        self.stream.as_ref().and_then(|s| s.count_viewers)
    }
}
