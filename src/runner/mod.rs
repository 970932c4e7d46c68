//! Setup orchestration.
//!
//! - [`setup`] - The setup runner: presence checks, installs, project install
//! - [`project`] - Where the project install runs

pub mod project;
pub mod setup;

pub use project::{default_project_root, resolve_project_root};
pub use setup::{
    RunOptions, RunReport, SetupRunner, ToolOutcome, ToolRun, INSTALLER_TITLE, NEXT_STEPS,
};
