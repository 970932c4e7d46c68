//! The setup run: presence checks, installs, then the project install.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, SetupError};
use crate::requirements::{Requirement, RequirementRegistry};
use crate::shell::{CommandLine, CommandOptions, System};
use crate::ui::UserInterface;

/// Title printed at the top of every run.
pub const INSTALLER_TITLE: &str = "Joshua Dependency Installer";

/// Instructions printed after a successful run.
pub const NEXT_STEPS: [&str; 2] = [
    "1. Copy .env.example to .env and fill in your credentials",
    "2. Run 'pnpm dev' to start development",
];

/// Options for a setup run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print commands instead of running them.
    pub dry_run: bool,
}

/// What happened to one tool during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Found on PATH; nothing was run.
    AlreadyPresent,
    /// Missing; its install commands ran and succeeded.
    Installed,
    /// Missing; its install commands were printed (dry run).
    Planned,
}

/// One tool's line in the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    /// Requirement name
    pub name: String,
    /// What the run did about it
    pub outcome: ToolOutcome,
}

/// Result of a completed setup run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Every tool, in check order.
    pub tools: Vec<ToolRun>,
    /// Directory the project install ran in.
    pub project_root: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunReport {
    /// Names of the tools that were installed or planned for install.
    pub fn installed(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|t| t.outcome != ToolOutcome::AlreadyPresent)
            .map(|t| t.name.as_str())
            .collect()
    }
}

/// Bootstraps a workstation: makes sure every tool is installed, then runs
/// the project's bulk dependency install.
///
/// Everything is sequential and blocking. The first failing command ends
/// the run with [`SetupError::CommandFailed`].
pub struct SetupRunner<'a> {
    registry: &'a RequirementRegistry,
    system: &'a mut dyn System,
    ui: &'a mut dyn UserInterface,
    project_root: PathBuf,
    options: RunOptions,
    planned: HashSet<String>,
}

impl<'a> SetupRunner<'a> {
    /// Create a runner for the given project root.
    pub fn new(
        registry: &'a RequirementRegistry,
        system: &'a mut dyn System,
        ui: &'a mut dyn UserInterface,
        project_root: &Path,
        options: RunOptions,
    ) -> Self {
        Self {
            registry,
            system,
            ui,
            project_root: project_root.to_path_buf(),
            options,
            planned: HashSet::new(),
        }
    }

    /// Whether `name` resolves on the command search path.
    pub fn check_command(&self, name: &str) -> bool {
        let found = self.system.locate(name);
        debug!("Presence check for '{}': {:?}", name, found);
        found.is_some()
    }

    /// Print and run a command.
    ///
    /// Returns whether it exited 0. With `fail_fast`, a failure is returned
    /// as [`SetupError::CommandFailed`] instead.
    pub fn run_command(&mut self, command: &CommandLine, fail_fast: bool) -> Result<bool> {
        self.run_command_in(command, None, fail_fast)
    }

    fn run_command_in(
        &mut self,
        command: &CommandLine,
        cwd: Option<&Path>,
        fail_fast: bool,
    ) -> Result<bool> {
        if self.options.dry_run {
            match cwd {
                Some(dir) => self
                    .ui
                    .message(&format!("Would run: {} (in {})", command, dir.display())),
                None => self.ui.message(&format!("Would run: {}", command)),
            }
            return Ok(true);
        }

        self.ui.message(&format!("Running: {}", command));
        let options = CommandOptions {
            cwd: cwd.map(Path::to_path_buf),
            ..Default::default()
        };

        let result = match self.system.execute(command, &options) {
            Ok(result) => result,
            Err(SetupError::CommandFailed { .. }) if !fail_fast => {
                warn!("Could not start '{}'", command);
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if result.success {
            return Ok(true);
        }

        warn!("'{}' exited with {:?}", command, result.exit_code);
        if fail_fast {
            return Err(SetupError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            });
        }
        Ok(false)
    }

    /// Run the whole setup.
    pub fn run(&mut self) -> Result<RunReport> {
        let registry = self.registry;
        registry.validate()?;

        if self.options.dry_run {
            self.ui
                .message("Running in dry-run mode; no commands will be executed.");
        }
        self.ui.show_header(INSTALLER_TITLE);

        let mut tools = Vec::with_capacity(registry.requirements().len());
        for requirement in registry.requirements() {
            let outcome = self.ensure_tool(requirement)?;
            tools.push(ToolRun {
                name: requirement.name.clone(),
                outcome,
            });
        }

        self.ui.message("");
        self.ui.message("Installing project dependencies...");
        let project = registry.project_install();
        self.ensure_prerequisites("project dependencies", &project.depends_on)?;
        self.ensure_programs("project dependencies", std::slice::from_ref(&project.command))?;

        let root = self.project_root.clone();
        info!("Installing project dependencies in {}", root.display());
        self.run_command_in(&project.command, Some(&root), true)?;

        self.ui.message("");
        self.ui.show_rule();
        self.ui.success("Setup complete!");
        self.ui.message("");
        self.ui.message("Next steps:");
        for step in NEXT_STEPS {
            self.ui.message(step);
        }

        Ok(RunReport {
            tools,
            project_root: root,
            dry_run: self.options.dry_run,
        })
    }

    fn ensure_tool(&mut self, requirement: &Requirement) -> Result<ToolOutcome> {
        if self.check_command(&requirement.binary) {
            self.ui
                .success(&format!("{} installed", requirement.display_name));
            if let Some(path) = self.system.locate(&requirement.binary) {
                self.ui.detail(&format!("  {}", path.display()));
            }
            return Ok(ToolOutcome::AlreadyPresent);
        }

        self.ui
            .message(&format!("Installing {}...", requirement.display_name));
        self.ensure_prerequisites(&requirement.name, &requirement.depends_on)?;
        self.ensure_programs(&requirement.name, &requirement.install)?;

        if requirement.needs_privilege() && !self.options.dry_run && !self.system.is_elevated() {
            self.ui.warning(&format!(
                "Installing {} uses sudo; you may be asked for your password.",
                requirement.display_name
            ));
        }

        for command in &requirement.install {
            self.run_command(command, true)?;
        }
        self.planned.insert(requirement.name.clone());

        Ok(if self.options.dry_run {
            ToolOutcome::Planned
        } else {
            ToolOutcome::Installed
        })
    }

    /// Fail with the first dependency that is not on PATH.
    ///
    /// In a dry run, a dependency whose install was planned counts as present.
    fn ensure_prerequisites(&self, dependent: &str, depends_on: &[String]) -> Result<()> {
        for dep in depends_on {
            let requirement = self
                .registry
                .get(dep)
                .ok_or_else(|| SetupError::UnknownRequirement { name: dep.clone() })?;

            let available = self.check_command(&requirement.binary)
                || (self.options.dry_run && self.planned.contains(dep));
            if !available {
                return Err(SetupError::MissingPrerequisite {
                    tool: dependent.to_string(),
                    prerequisite: dep.clone(),
                });
            }
        }
        Ok(())
    }

    /// Fail with the first program a command would run that is not on PATH.
    ///
    /// In a dry run a missing program is only warned about, unless a planned
    /// install provides it.
    fn ensure_programs(&mut self, dependent: &str, commands: &[CommandLine]) -> Result<()> {
        let mut checked: Vec<&str> = Vec::new();
        for program in commands.iter().flat_map(|c| c.stages()).map(|s| s.program()) {
            if checked.contains(&program) {
                continue;
            }
            checked.push(program);

            if self.check_command(program) || self.planned_binary(program) {
                continue;
            }
            if self.options.dry_run {
                self.ui.warning(&format!(
                    "'{}' is not on PATH; installing {} would fail",
                    program, dependent
                ));
                continue;
            }
            return Err(SetupError::MissingPrerequisite {
                tool: dependent.to_string(),
                prerequisite: program.to_string(),
            });
        }
        Ok(())
    }

    fn planned_binary(&self, program: &str) -> bool {
        self.options.dry_run
            && self
                .planned
                .iter()
                .filter_map(|name| self.registry.get(name))
                .any(|r| r.binary == program)
    }
}
