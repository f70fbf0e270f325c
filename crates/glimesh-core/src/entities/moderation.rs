//! Moderation entities - bans and moderation log entries

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::User;

/// A ban in a channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBan {
    pub id: Option<String>,
    pub reason: Option<String>,
    pub user: Option<User>,
    pub expires_at: Option<NaiveDateTime>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// An action taken by a moderator
///
/// Returned by the delete and timeout mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelModerationLog {
    pub id: Option<String>,
    pub action: Option<String>,
    pub moderator: Option<User>,
    pub user: Option<User>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
