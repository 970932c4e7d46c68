//! Run command implementation.
//!
//! The `joshua-setup run` command (also the default with no subcommand)
//! installs missing tools and then the project's dependencies.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::requirements::RequirementRegistry;
use crate::runner::{resolve_project_root, RunOptions, SetupRunner};
use crate::shell::{HostSystem, System};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project: project.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Execute against an explicit system.
    pub fn execute_with(
        &self,
        system: &mut dyn System,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let project_root = resolve_project_root(self.project.as_deref())?;
        let registry = RequirementRegistry::new();
        let options = RunOptions {
            dry_run: self.args.dry_run,
        };

        let report = SetupRunner::new(&registry, system, ui, &project_root, options).run()?;
        tracing::info!(
            "Setup finished; installed: {:?}",
            report.installed()
        );
        Ok(CommandResult::success())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&mut HostSystem::new(), ui)
    }
}
