//! GraphQL queries

use super::{with_arguments, PreparedRequest};
use crate::protocol::ReplyRef;
use glimesh_core::{ParamError, ParamName, Params};
use serde::{Deserialize, Serialize};
use std::fmt;

const CHANNELS_ARGS: [ParamName; 6] = [
    ParamName::CategorySlug,
    ParamName::Status,
    ParamName::First,
    ParamName::Last,
    ParamName::After,
    ParamName::Before,
];

const USERS_ARGS: [ParamName; 4] = [
    ParamName::First,
    ParamName::Last,
    ParamName::After,
    ParamName::Before,
];

/// Available queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Query {
    Categories,
    Category,
    Channel,
    Channels,
    Followers,
    HomepageChannels,
    /// The authenticated user, token connections only
    Myself,
    User,
    Users,
}

impl Query {
    pub const ALL: [Self; 9] = [
        Self::Categories,
        Self::Category,
        Self::Channel,
        Self::Channels,
        Self::Followers,
        Self::HomepageChannels,
        Self::Myself,
        Self::User,
        Self::Users,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Category => "Category",
            Self::Channel => "Channel",
            Self::Channels => "Channels",
            Self::Followers => "Followers",
            Self::HomepageChannels => "HomepageChannels",
            Self::Myself => "Myself",
            Self::User => "User",
            Self::Users => "Users",
        }
    }

    #[must_use]
    pub const fn reply_ref(self) -> ReplyRef {
        match self {
            Self::Categories => ReplyRef::Categories,
            Self::Category => ReplyRef::Category,
            Self::Channel => ReplyRef::ChannelQuery,
            Self::Channels => ReplyRef::Channels,
            Self::Followers => ReplyRef::Followers,
            Self::HomepageChannels => ReplyRef::HomepageChannels,
            Self::Myself => ReplyRef::Myself,
            Self::User => ReplyRef::User,
            Self::Users => ReplyRef::Users,
        }
    }

    /// Whether the query needs a connection opened with an access token
    #[must_use]
    pub const fn requires_token(self) -> bool {
        matches!(self, Self::Myself)
    }

    #[must_use]
    pub const fn default_selection(self) -> &'static str {
        match self {
            Self::Categories | Self::Category => "id, name, slug",
            Self::Channel => "id, title",
            Self::Channels => "edges {node {id, status}}",
            Self::Followers => "edges {node {user {username}, streamer {username}}}",
            Self::HomepageChannels => "edges {node {id, title, matureContent, streamer {username}}}",
            Self::Myself | Self::User => "id, username",
            Self::Users => "edges {node {id, username}}",
        }
    }

    /// Validate params and render the query
    pub fn prepare(self, params: &Params, ret_val: Option<&str>) -> Result<PreparedRequest, ParamError> {
        let field = match self {
            Self::Categories => "categories".to_string(),
            Self::Category => {
                let slug = params.required(ParamName::Name)?;
                format!("category(slug: {})", slug.to_string_literal())
            }
            Self::Channel => {
                let (name, value) = params.pick_required(&[
                    ParamName::Id,
                    ParamName::StreamerUsername,
                    ParamName::StreamerId,
                ])?;
                format!("channel({name}: {})", value.to_graphql())
            }
            Self::Channels => with_arguments("channels", &[params.combine_params(&CHANNELS_ARGS)]),
            Self::Followers => followers_field(params)?,
            Self::HomepageChannels => "homepageChannels".to_string(),
            Self::Myself => "myself".to_string(),
            Self::User => {
                let (name, value) = params.pick_required(&[ParamName::Id, ParamName::Username])?;
                format!("user({name}: {})", value.to_graphql())
            }
            Self::Users => with_arguments("users", &[params.combine_params(&USERS_ARGS)]),
        };

        Ok(PreparedRequest::new(
            self.reply_ref(),
            field,
            ret_val,
            self.default_selection(),
        ))
    }
}

/// Followers of a streamer or follows of a user, optionally paginated
///
/// The cursor is only used when a page size is given.
fn followers_field(params: &Params) -> Result<String, ParamError> {
    let (subject, id) = params.pick_required(&[ParamName::UserId, ParamName::StreamerId])?;
    let mut arguments = vec![format!("{subject}: {}", id.to_graphql())];

    if let Some((amount, count)) = params.pick_param(&[ParamName::First, ParamName::Last]) {
        arguments.push(format!("{amount}: {}", count.to_graphql()));

        if let Some((area, cursor)) = params.pick_param(&[ParamName::Before, ParamName::After]) {
            arguments.push(format!("{area}: {}", cursor.to_string_literal()));
        }
    }

    Ok(with_arguments("followers", &arguments))
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
