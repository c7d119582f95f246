//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error("failed to load {origin}: {source}")]
    Load {
        origin: String,
        #[source]
        source: StorageError,
    },
}
