//! User entity - a streamer, a viewer, or both

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Channel, Connection, Follower};

/// A Glimesh user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    /// Lowercase user identifier
    pub username: Option<String>,
    /// Same as the username, with the casing the user prefers
    pub displayname: Option<String>,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
    pub team_role: Option<String>,
    pub count_followers: Option<i64>,
    pub count_following: Option<i64>,
    pub profile_content_md: Option<String>,
    pub profile_content_html: Option<String>,
    pub youtube_intro_url: Option<String>,
    pub social_discord: Option<String>,
    pub social_guilded: Option<String>,
    pub social_instagram: Option<String>,
    pub social_youtube: Option<String>,
    pub allow_glimesh_newsletter_emails: Option<bool>,
    pub allow_live_subscription_emails: Option<bool>,
    pub channel: Option<Box<Channel>>,
    pub followers: Option<Connection<Follower>>,
    pub following: Option<Connection<Follower>>,
    pub following_live_channels: Option<Connection<Channel>>,
    pub confirmed_at: Option<NaiveDateTime>,
    pub inserted_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Name to show: display name when set, otherwise the username
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.displayname.as_deref().or(self.username.as_deref())
    }
}
