//! Match event log.
//!
//! Every state transition appends one or more `GameEvent`s. Past entries are
//! never rewritten, so the log doubles as an audit transcript.

pub mod event;

pub use event::{Effect, EffectSummary, EventKind, EventPayload, GameEvent, GameOverReason};
