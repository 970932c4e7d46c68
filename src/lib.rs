//! joshua-setup - development workstation bootstrap for the Joshua monorepo.
//!
//! Checks for Node.js, pnpm, the Supabase CLI and the EAS CLI, installs
//! whichever are missing through their own installers, then runs
//! `pnpm install` in the project root.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Tool registry and presence checks
//! - [`runner`] - The setup run and project root resolution
//! - [`shell`] - Structured commands and process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use joshua_setup::requirements::RequirementRegistry;
//! use joshua_setup::runner::{RunOptions, SetupRunner};
//! use joshua_setup::shell::MockSystem;
//! use joshua_setup::ui::MockUI;
//!
//! let registry = RequirementRegistry::new();
//! let mut system = MockSystem::with_tools(&["node", "pnpm", "supabase", "eas"]);
//! let mut ui = MockUI::new();
//!
//! let report = SetupRunner::new(
//!     &registry,
//!     &mut system,
//!     &mut ui,
//!     Path::new("/work/joshua"),
//!     RunOptions::default(),
//! )
//! .run()
//! .unwrap();
//!
//! assert!(report.installed().is_empty());
//! assert_eq!(system.commands(), vec!["pnpm install".to_string()]);
//! ```

pub mod cli;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
