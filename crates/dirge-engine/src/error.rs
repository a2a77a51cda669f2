//! Error types for the dying automation engine.

use dirge_core::{ActorId, HostError};

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while handling a host event.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The event referenced an actor the host no longer knows.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The host rejected a read or mutation. No compensation is attempted;
    /// downstream steps are independently idempotent and will be reattempted
    /// on the next qualifying event.
    #[error(transparent)]
    Host(#[from] HostError),
}
