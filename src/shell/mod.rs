//! Shell command execution and host access.

pub mod command;
pub mod mock;
pub mod platform;
pub mod system;

pub use command::{
    execute, execute_quiet, CommandLine, CommandOptions, CommandResult, CommandSpec,
};
pub use mock::{ExecutedCommand, MockSystem};
pub use platform::is_elevated;
pub use system::{HostSystem, System};
