//! GraphQL operations
//!
//! Each operation knows its reply reference, which params it needs, how to
//! render its GraphQL field and which fields to select by default.

mod mutation;
mod query;
mod subscription;

pub use mutation::Mutation;
pub use query::Query;
pub use subscription::SubscriptionKind;

use crate::protocol::ReplyRef;

/// Selection for chat message tokens
pub const MESSAGE_TOKENS: &str = "tokens {...on ChatMessageToken {text} ...on EmoteToken {src} ...on UrlToken {url} ...on TextToken {text}}";

/// A validated operation ready to hand to the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub reply_ref: ReplyRef,
    /// GraphQL field with arguments, e.g. `user(id: 5)`
    pub field: String,
    /// Fields selected on the result
    pub selection: String,
}

impl PreparedRequest {
    pub(crate) fn new(reply_ref: ReplyRef, field: String, ret_val: Option<&str>, default: &str) -> Self {
        let selection = match ret_val {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => default.to_string(),
        };
        Self {
            reply_ref,
            field,
            selection,
        }
    }
}

/// Render a field with an argument list, dropping the parentheses when empty
pub(crate) fn with_arguments(field: &str, arguments: &[String]) -> String {
    let arguments: Vec<&str> = arguments
        .iter()
        .map(String::as_str)
        .filter(|a| !a.is_empty())
        .collect();

    if arguments.is_empty() {
        field.to_string()
    } else {
        format!("{field}({})", arguments.join(", "))
    }
}
