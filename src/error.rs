//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing tool is not an error; it is reported as
//!   [`ToolStatus::Absent`](crate::requirements::ToolStatus) and triggers an install
//! - A failing command under fail-fast becomes [`SetupError::CommandFailed`]
//!   and ends the run
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Shell command failed (or could not be spawned, in which case `code` is `None`).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A tool cannot be installed because something it installs with is missing.
    #[error("Cannot install '{tool}': prerequisite '{prerequisite}' is not available on PATH")]
    MissingPrerequisite { tool: String, prerequisite: String },

    /// Project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// A requirement name that the registry does not know.
    #[error("Unknown requirement: {name}")]
    UnknownRequirement { name: String },

    /// The requirement registry breaks its ordering rules.
    #[error("Invalid requirement registry: {message}")]
    RegistryInvalid { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Process exit code for this error.
    ///
    /// A failed command propagates its own exit code; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::CommandFailed {
                code: Some(code), ..
            } if (1..=255).contains(code) => *code as u8,
            _ => 1,
        }
    }
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
