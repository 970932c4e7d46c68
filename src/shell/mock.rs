//! Mock system implementation for testing.
//!
//! `MockSystem` implements the [`System`] trait without touching the host.
//! Tools are "present" only when registered, commands succeed unless told
//! to fail, and every executed command is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use joshua_setup::shell::{CommandLine, CommandOptions, CommandSpec, MockSystem, System};
//!
//! let mut system = MockSystem::with_tools(&["node"]);
//! system.provides("npm install -g pnpm", "pnpm");
//!
//! let install: CommandLine = CommandSpec::new("npm").args(["install", "-g", "pnpm"]).into();
//! system.execute(&install, &CommandOptions::default()).unwrap();
//!
//! assert!(system.locate("pnpm").is_some());
//! assert_eq!(system.commands(), vec!["npm install -g pnpm".to_string()]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandLine, CommandOptions, CommandResult};
use super::system::System;

/// A command the mock was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    /// Display form of the command line.
    pub command: String,
    /// Working directory it was given.
    pub cwd: Option<PathBuf>,
}

/// Mock system for testing.
#[derive(Debug, Default)]
pub struct MockSystem {
    present: HashMap<String, PathBuf>,
    failures: HashMap<String, i32>,
    provided: HashMap<String, Vec<String>>,
    outputs: HashMap<String, String>,
    executed: Vec<ExecutedCommand>,
    elevated: bool,
}

impl MockSystem {
    /// Create a mock with no tools installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with the given tools present under `/usr/bin`.
    pub fn with_tools(tools: &[&str]) -> Self {
        let mut system = Self::new();
        for tool in tools {
            system.add_tool(tool);
        }
        system
    }

    /// Mark a tool as present.
    pub fn add_tool(&mut self, tool: &str) {
        self.present
            .insert(tool.to_string(), PathBuf::from("/usr/bin").join(tool));
    }

    /// Make the command with this display form exit with `code`.
    pub fn fail_command(&mut self, command: &str, code: i32) {
        self.failures.insert(command.to_string(), code);
    }

    /// When the command succeeds, `tool` becomes present.
    pub fn provides(&mut self, command: &str, tool: &str) {
        self.provided
            .entry(command.to_string())
            .or_default()
            .push(tool.to_string());
    }

    /// Set the captured stdout returned for a command.
    pub fn set_output(&mut self, command: &str, stdout: &str) {
        self.outputs.insert(command.to_string(), stdout.to_string());
    }

    /// Pretend the process runs as root.
    pub fn set_elevated(&mut self, elevated: bool) {
        self.elevated = elevated;
    }

    /// Every command executed so far, in order.
    pub fn executed(&self) -> &[ExecutedCommand] {
        &self.executed
    }

    /// Display forms of every executed command, in order.
    pub fn commands(&self) -> Vec<String> {
        self.executed.iter().map(|c| c.command.clone()).collect()
    }
}

impl System for MockSystem {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        self.present.get(binary).cloned()
    }

    fn execute(
        &mut self,
        command: &CommandLine,
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        let display = command.to_string();
        self.executed.push(ExecutedCommand {
            command: display.clone(),
            cwd: options.cwd.clone(),
        });

        let stdout = self.outputs.get(&display).cloned().unwrap_or_default();

        if let Some(code) = self.failures.get(&display) {
            return Ok(CommandResult::failure(
                Some(*code),
                stdout,
                String::new(),
                Duration::ZERO,
            ));
        }

        if let Some(tools) = self.provided.get(&display).cloned() {
            for tool in tools {
                self.add_tool(&tool);
            }
        }

        Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandSpec;

    fn cmd(program: &str, args: &[&str]) -> CommandLine {
        CommandSpec::new(program).args(args.iter().copied()).into()
    }

    #[test]
    fn elevation_is_settable() {
        let mut system = MockSystem::new();
        assert!(!system.is_elevated());
        system.set_elevated(true);
        assert!(system.is_elevated());
    }

    #[test]
    fn tools_are_absent_by_default() {
        let system = MockSystem::new();
        assert!(system.locate("node").is_none());
    }

    #[test]
    fn with_tools_registers_paths() {
        let system = MockSystem::with_tools(&["node", "pnpm"]);
        assert_eq!(system.locate("node"), Some(PathBuf::from("/usr/bin/node")));
        assert!(system.locate("pnpm").is_some());
        assert!(system.locate("eas").is_none());
    }

    #[test]
    fn records_commands_and_cwd() {
        let mut system = MockSystem::new();
        let options = CommandOptions {
            cwd: Some(PathBuf::from("/work")),
            ..Default::default()
        };
        system.execute(&cmd("pnpm", &["install"]), &options).unwrap();

        assert_eq!(
            system.executed(),
            &[ExecutedCommand {
                command: "pnpm install".to_string(),
                cwd: Some(PathBuf::from("/work")),
            }]
        );
    }

    #[test]
    fn configured_failure_returns_exit_code() {
        let mut system = MockSystem::new();
        system.fail_command("npm install -g eas-cli", 243);
        let result = system
            .execute(&cmd("npm", &["install", "-g", "eas-cli"]), &CommandOptions::default())
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(243));
    }

    #[test]
    fn failed_command_does_not_provide_tool() {
        let mut system = MockSystem::new();
        system.provides("npm install -g supabase", "supabase");
        system.fail_command("npm install -g supabase", 1);
        system
            .execute(&cmd("npm", &["install", "-g", "supabase"]), &CommandOptions::default())
            .unwrap();
        assert!(system.locate("supabase").is_none());
    }

    #[test]
    fn set_output_is_returned() {
        let mut system = MockSystem::new();
        system.set_output("node --version", "v20.11.1\n");
        let result = system
            .execute(&cmd("node", &["--version"]), &CommandOptions::default())
            .unwrap();
        assert_eq!(result.stdout, "v20.11.1\n");
    }
}
