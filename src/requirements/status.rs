//! Tool status types for presence checks.
//!
//! Each presence check produces a [`ToolStatus`]. An absent tool is a
//! normal outcome, not an error: it is what triggers an install.

use serde::Serialize;
use std::path::PathBuf;

/// The result of checking a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Binary resolves on PATH.
    Present {
        /// Resolved binary path
        path: PathBuf,
    },

    /// Binary does not resolve on PATH.
    Absent,
}

impl ToolStatus {
    /// Whether the tool is available.
    pub fn is_present(&self) -> bool {
        matches!(self, ToolStatus::Present { .. })
    }

    /// The resolved path, if present.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ToolStatus::Present { path } => Some(path),
            ToolStatus::Absent => None,
        }
    }
}

/// One row of `status` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    /// Requirement name
    pub name: String,
    /// Name shown to the user
    pub display_name: String,
    /// Executable that was looked up
    pub binary: String,
    /// Whether the binary resolved
    pub present: bool,
    /// Where it resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Version reported by `<binary> --version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
