//! Structured command lines and their execution.
//!
//! Commands are argument lists, never shell strings. A [`CommandLine`] is a
//! pipeline of one or more [`CommandSpec`] stages; the stages are spawned
//! directly and joined with OS pipes, so nothing is ever parsed by a shell.

use crate::error::{Result, SetupError};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// A single program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// A pipeline of one or more commands, stdout of each feeding stdin of the next.
///
/// Always holds at least one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    stages: Vec<CommandSpec>,
}

impl CommandLine {
    /// A single-stage command line.
    pub fn new(first: CommandSpec) -> Self {
        Self {
            stages: vec![first],
        }
    }

    /// Pipe this command line's output into `next`.
    pub fn pipe(mut self, next: CommandSpec) -> Self {
        self.stages.push(next);
        self
    }

    /// All stages in pipeline order.
    pub fn stages(&self) -> &[CommandSpec] {
        &self.stages
    }

    /// Whether any stage runs the given program.
    pub fn invokes(&self, program: &str) -> bool {
        self.stages.iter().any(|s| s.program == program)
    }
}

impl From<CommandSpec> for CommandLine {
    fn from(spec: CommandSpec) -> Self {
        Self::new(spec)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", stage)?;
        }
        Ok(())
    }
}

/// Quote an argument for display if a shell would otherwise split or expand it.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Result of executing a command line.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    ///
    /// For a pipeline this is the code of the first failing stage, or 0.
    /// It is not necessarily the last stage's code.
    pub exit_code: Option<i32>,

    /// Standard output of the last stage, when captured.
    pub stdout: String,

    /// Standard error of the last stage, when captured.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether every stage exited 0.
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout of the last stage (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr of the last stage (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Execute a command line and wait for every stage to finish.
///
/// A pipeline succeeds only if all of its stages exit 0.
pub fn execute(command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let spawn_failed = || SetupError::CommandFailed {
        command: command.to_string(),
        code: None,
    };

    let last = command.stages.len() - 1;
    let mut children: Vec<Child> = Vec::with_capacity(command.stages.len());
    let mut upstream: Option<ChildStdout> = None;

    for (i, stage) in command.stages.iter().enumerate() {
        let mut cmd = Command::new(&stage.program);
        cmd.args(&stage.args);

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }
        cmd.envs(&options.env);

        if let Some(out) = upstream.take() {
            cmd.stdin(Stdio::from(out));
        }

        if i < last || options.capture_stdout {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        if i == last && options.capture_stderr {
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stderr(Stdio::inherit());
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("Failed to spawn '{}': {}", stage.program, e);
                reap(&mut children);
                return Err(spawn_failed());
            }
        };

        if i < last {
            upstream = child.stdout.take();
        }
        children.push(child);
    }

    // Wait on the last stage first: it drains the captured pipes, and the
    // earlier stages cannot finish until it reads their output.
    let mut statuses: Vec<Option<ExitStatus>> = vec![None; children.len()];
    let mut stdout = String::new();
    let mut stderr = String::new();

    for (i, mut child) in children.into_iter().enumerate().rev() {
        if i == last {
            let output = child.wait_with_output().map_err(|_| spawn_failed())?;
            if options.capture_stdout {
                stdout = String::from_utf8_lossy(&output.stdout).to_string();
            }
            if options.capture_stderr {
                stderr = String::from_utf8_lossy(&output.stderr).to_string();
            }
            statuses[i] = Some(output.status);
        } else {
            statuses[i] = Some(child.wait().map_err(|_| spawn_failed())?);
        }
    }

    let duration = start.elapsed();

    match statuses.iter().flatten().find(|s| !s.success()) {
        None => Ok(CommandResult::success(stdout, stderr, duration)),
        Some(failed) => Ok(CommandResult::failure(
            failed.code(),
            stdout,
            stderr,
            duration,
        )),
    }
}

/// Kill and wait for stages already spawned when a later stage fails to start.
fn reap(children: &mut Vec<Child>) {
    for child in children.iter_mut() {
        let _ = child.kill();
        let _ = child.wait();
    }
    children.clear();
}

/// Execute a command line, capture its output, and return it without streaming.
pub fn execute_quiet(command: &CommandLine) -> Result<CommandResult> {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    execute(command, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodesource() -> CommandLine {
        CommandLine::new(
            CommandSpec::new("curl").args(["-fsSL", "https://deb.nodesource.com/setup_20.x"]),
        )
        .pipe(CommandSpec::new("sudo").args(["-E", "bash", "-"]))
    }

    #[test]
    fn display_single_command() {
        let cmd: CommandLine = CommandSpec::new("npm")
            .args(["install", "-g", "pnpm"])
            .into();
        assert_eq!(cmd.to_string(), "npm install -g pnpm");
    }

    #[test]
    fn display_pipeline() {
        assert_eq!(
            nodesource().to_string(),
            "curl -fsSL https://deb.nodesource.com/setup_20.x | sudo -E bash -"
        );
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandSpec::new("echo").arg("hello world").arg("it's");
        assert_eq!(cmd.to_string(), r"echo 'hello world' 'it'\''s'");
    }

    #[test]
    fn display_quotes_empty_argument() {
        let cmd = CommandSpec::new("printf").arg("");
        assert_eq!(cmd.to_string(), "printf ''");
    }

    #[test]
    fn invokes_checks_every_stage() {
        let cmd = nodesource();
        assert!(cmd.invokes("sudo"));
        assert!(cmd.invokes("curl"));
        assert!(!cmd.invokes("apt-get"));
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success("out".into(), "err".into(), Duration::from_secs(1));
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(Some(2), String::new(), String::new(), Duration::ZERO);
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stdout() {
        let cmd: CommandLine = CommandSpec::new("echo").arg("hello").into();
        let result = execute_quiet(&cmd).unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_exit_code() {
        let cmd: CommandLine = CommandSpec::new("sh").args(["-c", "exit 3"]).into();
        let result = execute_quiet(&cmd).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn execute_runs_in_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let cmd: CommandLine = CommandSpec::new("pwd").into();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture_stdout: true,
            ..Default::default()
        };
        let result = execute(&cmd, &options).unwrap();
        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(temp.path()).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn execute_pipes_stages() {
        let cmd = CommandLine::new(CommandSpec::new("echo").arg("piped text"))
            .pipe(CommandSpec::new("tr").args(["a-z", "A-Z"]));
        let result = execute_quiet(&cmd).unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "PIPED TEXT");
    }

    #[cfg(unix)]
    #[test]
    fn execute_pipeline_fails_when_early_stage_fails() {
        let cmd = CommandLine::new(CommandSpec::new("sh").args(["-c", "exit 7"]))
            .pipe(CommandSpec::new("cat"));
        let result = execute_quiet(&cmd).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(7));
    }

    #[test]
    fn execute_missing_program_is_command_failed() {
        let cmd: CommandLine = CommandSpec::new("this-command-does-not-exist-12345").into();
        let err = execute_quiet(&cmd).unwrap_err();
        assert!(matches!(err, SetupError::CommandFailed { code: None, .. }));
    }
}
