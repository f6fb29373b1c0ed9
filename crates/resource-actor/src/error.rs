//! # Framework Errors
//!
//! Failures of the actor plumbing itself. Missing records are not errors at this level:
//! lookups return `Option` and callers decide what absence means.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No identifiers left to assign")]
    IdsExhausted,
}
