//! CLI error type.

use std::io;

use motion_trail::TrailError;
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from the trail library.
    #[error(transparent)]
    Trail(#[from] TrailError),

    /// Failed to serialize output.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid combination of arguments.
    #[error("{0}")]
    Usage(String),
}
