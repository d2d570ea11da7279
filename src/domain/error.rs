use std::io;

use thiserror::Error;

/// Library-wide error type for scaffolint operations.
///
/// A missing or wrong-kind scaffold entry is never an `AppError`; those are
/// collected as diagnostics so a single run reports every absent artifact.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Repository root does not exist or is not a directory.
    #[error("Repository root not found: {0}")]
    RootNotFound(String),

    /// Machine-readable report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
