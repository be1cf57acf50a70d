//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Expected conditions such as a missing post are reported as `None` or
/// `false`, never through this type.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    Operation(String),
}
