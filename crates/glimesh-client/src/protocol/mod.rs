//! Wire protocol definitions
//!
//! Phoenix channels (v2 serializer) as spoken by the Absinthe GraphQL endpoint:
//! every frame is a 5 element JSON array.

mod envelope;
mod phx_event;
mod reply_ref;
mod topic;

pub use envelope::Envelope;
pub use phx_event::PhxEvent;
pub use reply_ref::{RefKind, ReplyRef};
pub use topic::Topic;
