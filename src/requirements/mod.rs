//! Tool requirements and presence checking.
//!
//! # Modules
//!
//! - [`registry`] - The ordered list of tools and how to install them
//! - [`probe`] - PATH lookup for tool binaries
//! - [`status`] - Presence results and status report rows
//! - [`checker`] - Presence checks and version detection

pub mod checker;
pub mod probe;
pub mod registry;
pub mod status;

pub use registry::{ProjectInstall, Requirement, RequirementRegistry};
pub use status::{ToolReport, ToolStatus};
