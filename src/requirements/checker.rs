//! Presence checks and status reporting.

use crate::requirements::registry::{Requirement, RequirementRegistry};
use crate::requirements::status::{ToolReport, ToolStatus};
use crate::shell::{CommandLine, CommandOptions, CommandSpec, System};
use regex::Regex;

/// Check one requirement's binary on the system.
pub fn check(requirement: &Requirement, system: &dyn System) -> ToolStatus {
    match system.locate(&requirement.binary) {
        Some(path) => ToolStatus::Present { path },
        None => ToolStatus::Absent,
    }
}

/// Build a status report for every requirement, in registry order.
///
/// Present tools are asked for `--version`; a tool that fails to answer is
/// still reported present, just without a version.
pub fn report(registry: &RequirementRegistry, system: &mut dyn System) -> Vec<ToolReport> {
    registry
        .requirements()
        .iter()
        .map(|req| {
            let status = check(req, system);
            let version = if status.is_present() {
                detect_version(&req.binary, system)
            } else {
                None
            };
            ToolReport {
                name: req.name.clone(),
                display_name: req.display_name.clone(),
                binary: req.binary.clone(),
                present: status.is_present(),
                path: status.path().cloned(),
                version,
            }
        })
        .collect()
}

/// Run `<binary> --version` and pull a version number out of the output.
pub fn detect_version(binary: &str, system: &mut dyn System) -> Option<String> {
    let command: CommandLine = CommandSpec::new(binary).arg("--version").into();
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };

    match system.execute(&command, &options) {
        Ok(result) if result.success => {
            extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
        }
        Ok(result) => {
            tracing::debug!("'{}' exited with {:?}", command, result.exit_code);
            None
        }
        Err(e) => {
            tracing::debug!("Could not run '{}': {}", command, e);
            None
        }
    }
}

/// Extract version from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockSystem;
    use std::path::PathBuf;

    #[test]
    fn check_present_tool() {
        let registry = RequirementRegistry::new();
        let system = MockSystem::with_tools(&["node"]);
        let status = check(registry.get("node").unwrap(), &system);
        assert_eq!(
            status,
            ToolStatus::Present {
                path: PathBuf::from("/usr/bin/node")
            }
        );
    }

    #[test]
    fn check_absent_tool() {
        let registry = RequirementRegistry::new();
        let system = MockSystem::new();
        assert_eq!(
            check(registry.get("eas").unwrap(), &system),
            ToolStatus::Absent
        );
    }

    #[test]
    fn report_covers_every_tool_in_order() {
        let registry = RequirementRegistry::new();
        let mut system = MockSystem::with_tools(&["node", "supabase"]);
        system.set_output("node --version", "v20.11.1\n");
        system.set_output("supabase --version", "1.187.3\n");

        let rows = report(&registry, &mut system);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["node", "pnpm", "supabase", "eas"]);

        assert!(rows[0].present);
        assert_eq!(rows[0].version.as_deref(), Some("20.11.1"));
        assert!(!rows[1].present);
        assert!(rows[1].version.is_none());
        assert_eq!(rows[2].version.as_deref(), Some("1.187.3"));
    }

    #[test]
    fn report_never_runs_absent_tools() {
        let registry = RequirementRegistry::new();
        let mut system = MockSystem::with_tools(&["pnpm"]);
        report(&registry, &mut system);
        assert_eq!(system.commands(), vec!["pnpm --version".to_string()]);
    }

    #[test]
    fn detect_version_ignores_failures() {
        let mut system = MockSystem::with_tools(&["eas"]);
        system.set_output("eas --version", "eas-cli/12.0.0");
        system.fail_command("eas --version", 1);
        assert!(detect_version("eas", &mut system).is_none());
    }

    #[test]
    fn extract_version_semver() {
        let output = "eas-cli/12.5.4 linux-x64 node-v20.11.1";
        assert_eq!(extract_version(output), Some("12.5.4".to_string()));
    }

    #[test]
    fn extract_version_with_v() {
        assert_eq!(extract_version("v18.17"), Some("18.17".to_string()));
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }
}
