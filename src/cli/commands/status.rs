//! Status command implementation.
//!
//! The `joshua-setup status` command shows which tools are installed.
//! It never installs anything.

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::requirements::checker;
use crate::requirements::{RequirementRegistry, ToolReport};
use crate::shell::{HostSystem, System};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(args: StatusArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }

    /// Execute against an explicit system.
    ///
    /// Exits 0 when every tool is present, 1 otherwise.
    pub fn execute_with(
        &self,
        system: &mut dyn System,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let registry = RequirementRegistry::new();
        let rows = checker::report(&registry, system);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            show_rows(&rows, ui);
        }

        if rows.iter().all(|r| r.present) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn show_rows(rows: &[ToolReport], ui: &mut dyn UserInterface) {
    for row in rows {
        if row.present {
            let version = row
                .version
                .as_deref()
                .map(|v| format!(" {}", v))
                .unwrap_or_default();
            ui.success(&format!("{}{} installed", row.display_name, version));
            if let Some(path) = &row.path {
                ui.detail(&format!("  {}", path.display()));
            }
        } else {
            ui.warning(&format!("{} not installed", row.display_name));
        }
    }

    let missing = rows.iter().filter(|r| !r.present).count();
    if missing > 0 {
        ui.message("");
        ui.message(&format!(
            "{} tool{} missing. Run 'joshua-setup' to install.",
            missing,
            if missing == 1 { "" } else { "s" }
        ));
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&mut HostSystem::new(), ui)
    }
}
