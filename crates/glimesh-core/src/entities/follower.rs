//! Follower entity - a user following a streamer

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::User;

/// A follow relation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follower {
    pub id: Option<String>,
    pub has_live_notifications: Option<bool>,
    /// The user being followed
    pub streamer: Option<Box<User>>,
    /// The user following
    pub user: Option<Box<User>>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
