//! Engine error types.

use thiserror::Error;

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the engine's checked helpers.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No live selection exists yet.
    #[error("no selection has been drawn")]
    NoSelection,
}
