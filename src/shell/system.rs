//! The seam between the setup logic and the host operating system.

use crate::error::Result;
use crate::requirements::probe;
use std::path::PathBuf;

use super::command::{self, CommandLine, CommandOptions, CommandResult};
use super::platform;

/// Everything the setup logic needs from the host: finding binaries and
/// running commands.
///
/// [`HostSystem`] talks to the real machine; [`MockSystem`](super::MockSystem)
/// records calls for tests.
pub trait System {
    /// Resolve an executable on the command search path.
    fn locate(&self, binary: &str) -> Option<PathBuf>;

    /// Run a command line to completion.
    fn execute(&mut self, command: &CommandLine, options: &CommandOptions)
        -> Result<CommandResult>;

    /// Whether commands run as root, so `sudo` will not ask for a password.
    fn is_elevated(&self) -> bool;
}

/// The real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystem;

impl HostSystem {
    /// Create a host system handle.
    pub fn new() -> Self {
        Self
    }
}

impl System for HostSystem {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        probe::locate(binary)
    }

    fn execute(
        &mut self,
        command: &CommandLine,
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        tracing::debug!("Executing: {}", command);
        let result = command::execute(command, options)?;
        tracing::debug!(
            "Finished '{}' with {:?} in {:?}",
            command,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }

    fn is_elevated(&self) -> bool {
        platform::is_elevated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandSpec;

    #[test]
    fn host_locate_missing_binary() {
        let host = HostSystem::new();
        assert!(host.locate("this-command-does-not-exist-12345").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn host_execute_reports_success() {
        let mut host = HostSystem::new();
        let cmd: CommandLine = CommandSpec::new("true").into();
        let result = host.execute(&cmd, &CommandOptions::default()).unwrap();
        assert!(result.success);
    }

    #[test]
    fn host_elevation_matches_platform() {
        assert_eq!(HostSystem::new().is_elevated(), platform::is_elevated());
    }
}
