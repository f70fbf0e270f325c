//! Client events
//!
//! Everything that happens on the connection is re-emitted as a
//! [`GlimeshEvent`] through the [`EventEmitter`].

mod emitter;
mod event;
mod event_name;

pub use emitter::EventEmitter;
pub use event::GlimeshEvent;
pub use event_name::EventName;
