//! Routing from parsed arguments to command implementations.

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::run::RunCommand;
use super::status::StatusCommand;

/// A subcommand ready to execute.
pub trait Command {
    /// Execute the command, writing human-readable output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// How a command finished when it did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command did everything it was asked to.
    pub success: bool,

    /// Process exit code.
    pub exit_code: i32,
}

impl CommandResult {
    /// Finished cleanly; exit 0.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Finished with a non-zero exit code but no error to report.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Turns the parsed command line into a [`Command`] and runs it.
pub struct CommandDispatcher {
    project: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher; `project` is the `--project` override, if any.
    pub fn new(project: Option<PathBuf>) -> Self {
        Self { project }
    }

    /// The project root override.
    pub fn project(&self) -> Option<&Path> {
        self.project.as_deref()
    }

    /// Build the command for `cli`. No subcommand means `run` with defaults.
    pub fn command_for(&self, cli: &Cli) -> Box<dyn Command> {
        match &cli.command {
            None => Box::new(RunCommand::new(self.project(), RunArgs::default())),
            Some(Commands::Run(args)) => Box::new(RunCommand::new(self.project(), args.clone())),
            Some(Commands::Status(args)) => Box::new(StatusCommand::new(args.clone())),
            Some(Commands::Completions(args)) => Box::new(CompletionsCommand::new(args.clone())),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.command_for(cli).execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_result_constructors() {
        assert_eq!(
            CommandResult::success(),
            CommandResult {
                success: true,
                exit_code: 0
            }
        );
        let failed = CommandResult::failure(1);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_project_override() {
        let dispatcher = CommandDispatcher::new(Some(PathBuf::from("/srv/joshua")));
        assert_eq!(dispatcher.project(), Some(Path::new("/srv/joshua")));
        assert!(CommandDispatcher::new(None).project().is_none());
    }

    #[test]
    fn dispatch_completions_succeeds() {
        let cli = Cli::parse_from(["joshua-setup", "completions", "bash"]);
        let mut ui = crate::ui::MockUI::new();
        let result = CommandDispatcher::new(None).dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
    }
}
