//! Engine error taxonomy

use thiserror::Error;

use crate::host::StoreError;

/// Errors surfaced by the single-block paste flow.
///
/// Resolution failures never reach callers: every lookup site has a
/// fallback in scope, so they surface as the formatter's degraded label
/// and the one-per-invocation notification, not as an error value.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No focused block to write into; nothing was written.
    #[error("no target block to write into")]
    MissingTarget,

    /// The input does not contain a recognizable DOI; nothing was written.
    #[error("input does not contain a recognizable DOI")]
    InvalidInput,

    /// The document store rejected a write.
    #[error(transparent)]
    Write(#[from] StoreError),
}
