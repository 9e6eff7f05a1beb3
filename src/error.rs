//! Error types for binscout operations.
//!
//! This module defines [`BinscoutError`], the error type used by the
//! process-invocation layer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only the process-invocation layer ([`crate::shell`]) produces errors
//! - The resolver absorbs every error internally and falls through to the
//!   next strategy; resolution itself never fails
//! - Use `anyhow::Error` (via `BinscoutError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for binscout operations.
#[derive(Debug, Error)]
pub enum BinscoutError {
    /// Failed to spawn an external command.
    #[error("Failed to spawn command: {command}")]
    SpawnFailed { command: String },

    /// External command exceeded its time budget and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimeout { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for binscout operations.
pub type Result<T> = std::result::Result<T, BinscoutError>;
