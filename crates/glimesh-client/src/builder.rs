//! Request frame builder

use crate::operations::PreparedRequest;
use crate::protocol::{Envelope, PhxEvent, ReplyRef, Topic};
use serde_json::json;

/// GraphQL operation type of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Subscription,
    Query,
    Mutation,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscription => "subscription",
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// Builds outbound frames, all stamped with the same join ref
#[derive(Debug, Clone)]
pub struct Builder {
    join_ref: String,
}

impl Builder {
    pub fn new(join_ref: impl Into<String>) -> Self {
        Self {
            join_ref: join_ref.into(),
        }
    }

    #[must_use]
    pub fn join_ref(&self) -> &str {
        &self.join_ref
    }

    /// Join the Absinthe control channel
    #[must_use]
    pub fn build_join(&self) -> Envelope {
        Envelope::request(
            &self.join_ref,
            ReplyRef::Open.as_str(),
            Topic::Control,
            PhxEvent::Join,
            json!({}),
        )
    }

    #[must_use]
    pub fn build_heartbeat(&self) -> Envelope {
        Envelope::request(
            &self.join_ref,
            ReplyRef::Heartbeat.as_str(),
            Topic::Phoenix,
            PhxEvent::Heartbeat,
            json!({}),
        )
    }

    #[must_use]
    pub fn build_subscription(&self, reply_ref: ReplyRef, graphql: &str, ret_val: &str) -> Envelope {
        self.build_document(DocumentKind::Subscription, reply_ref, graphql, ret_val)
    }

    #[must_use]
    pub fn build_query(&self, reply_ref: ReplyRef, graphql: &str, ret_val: &str) -> Envelope {
        self.build_document(DocumentKind::Query, reply_ref, graphql, ret_val)
    }

    #[must_use]
    pub fn build_mutation(&self, reply_ref: ReplyRef, graphql: &str, ret_val: &str) -> Envelope {
        self.build_document(DocumentKind::Mutation, reply_ref, graphql, ret_val)
    }

    /// Build the frame for a prepared operation
    #[must_use]
    pub fn build(&self, kind: DocumentKind, request: &PreparedRequest) -> Envelope {
        self.build_document(kind, request.reply_ref, &request.field, &request.selection)
    }

    fn build_document(&self, kind: DocumentKind, reply_ref: ReplyRef, graphql: &str, ret_val: &str) -> Envelope {
        Envelope::request(
            &self.join_ref,
            reply_ref.as_str(),
            Topic::Control,
            PhxEvent::Doc,
            json!({
                "query": document(kind, graphql, ret_val),
                "variables": {},
            }),
        )
    }
}

/// `<kind> {<field> {<selection>}}`, without the inner braces for scalars
fn document(kind: DocumentKind, graphql: &str, ret_val: &str) -> String {
    let ret_val = ret_val.trim();
    if ret_val.is_empty() {
        format!("{} {{{graphql}}}", kind.as_str())
    } else {
        format!("{} {{{graphql} {{{ret_val}}}}}", kind.as_str())
    }
}
