//! Error type for the CLI layer.
//!
//! Absent or malformed planning files are absorbed into defaults by the
//! resolution core and never reach this type. `ToolError` covers the faults
//! the CLI layer itself can hit: an unusable project root, output
//! serialization, or writing to stdout.

use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Faults surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The project root is missing or not representable as UTF-8.
    #[error("invalid project root: {0}")]
    InvalidRoot(String),

    /// Failed to serialize a result record to JSON.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write a result record to stdout.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Map this error to its process exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidRoot(_) => ExitCode::CLI_ARGS,
            Self::Serialize(_) | Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}
