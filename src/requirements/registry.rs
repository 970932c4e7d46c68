//! Requirement registry and definitions.
//!
//! Defines which tools the workstation needs, how to find them, and how to
//! install them. The list is fixed at compile time and ordered: a
//! requirement may only depend on requirements declared before it.

use crate::error::{Result, SetupError};
use crate::shell::{CommandLine, CommandSpec};
use std::collections::HashSet;

/// A tool requirement.
#[derive(Debug, Clone)]
pub struct Requirement {
    /// Requirement name (e.g., "node", "pnpm")
    pub name: String,
    /// Name shown to the user (e.g., "Node.js")
    pub display_name: String,
    /// Executable whose presence on PATH satisfies the requirement
    pub binary: String,
    /// Commands that install the tool, run in order
    pub install: Vec<CommandLine>,
    /// Requirements that must be present before installing this one
    pub depends_on: Vec<String>,
}

impl Requirement {
    /// Whether any install command goes through `sudo`.
    pub fn needs_privilege(&self) -> bool {
        self.install.iter().any(|c| c.invokes("sudo"))
    }
}

/// The bulk dependency install run in the project root.
#[derive(Debug, Clone)]
pub struct ProjectInstall {
    /// Command that installs every dependency the project manifest declares
    pub command: CommandLine,
    /// Requirements that must be present before it runs
    pub depends_on: Vec<String>,
}

/// Ordered registry of all known requirements.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    requirements: Vec<Requirement>,
    project_install: ProjectInstall,
}

fn npm_global(package: &str) -> CommandLine {
    CommandSpec::new("npm")
        .args(["install", "-g", package])
        .into()
}

impl RequirementRegistry {
    /// Create a registry with the built-in requirements.
    pub fn new() -> Self {
        let requirements = vec![
            Requirement {
                name: "node".to_string(),
                display_name: "Node.js".to_string(),
                binary: "node".to_string(),
                install: vec![
                    CommandLine::new(
                        CommandSpec::new("curl")
                            .args(["-fsSL", "https://deb.nodesource.com/setup_20.x"]),
                    )
                    .pipe(CommandSpec::new("sudo").args(["-E", "bash", "-"])),
                    CommandSpec::new("sudo")
                        .args(["apt-get", "install", "-y", "nodejs"])
                        .into(),
                ],
                depends_on: vec![],
            },
            // The CLIs below install through npm. The NodeSource package bundles it,
            // distro nodejs packages may not; the runner checks for npm itself.
            Requirement {
                name: "pnpm".to_string(),
                display_name: "pnpm".to_string(),
                binary: "pnpm".to_string(),
                install: vec![npm_global("pnpm")],
                depends_on: vec!["node".to_string()],
            },
            Requirement {
                name: "supabase".to_string(),
                display_name: "Supabase CLI".to_string(),
                binary: "supabase".to_string(),
                install: vec![npm_global("supabase")],
                depends_on: vec!["node".to_string()],
            },
            Requirement {
                name: "eas".to_string(),
                display_name: "EAS CLI".to_string(),
                binary: "eas".to_string(),
                install: vec![npm_global("eas-cli")],
                depends_on: vec!["node".to_string()],
            },
        ];

        let project_install = ProjectInstall {
            command: CommandSpec::new("pnpm").arg("install").into(),
            depends_on: vec!["pnpm".to_string()],
        };

        Self {
            requirements,
            project_install,
        }
    }

    /// Build a registry from explicit parts.
    pub fn from_parts(requirements: Vec<Requirement>, project_install: ProjectInstall) -> Self {
        Self {
            requirements,
            project_install,
        }
    }

    /// Get a requirement by name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }

    /// All requirements in check order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// The bulk dependency install.
    pub fn project_install(&self) -> &ProjectInstall {
        &self.project_install
    }

    /// Names of all requirements in check order.
    pub fn known_names(&self) -> Vec<&str> {
        self.requirements.iter().map(|r| r.name.as_str()).collect()
    }

    /// Check the ordering rules.
    ///
    /// Names are unique, every requirement has at least one install command,
    /// and every dependency names a requirement declared earlier.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();

        for req in &self.requirements {
            if req.install.is_empty() {
                return Err(SetupError::RegistryInvalid {
                    message: format!("'{}' has no install command", req.name),
                });
            }
            for dep in &req.depends_on {
                if dep == &req.name {
                    return Err(SetupError::RegistryInvalid {
                        message: format!("'{}' depends on itself", req.name),
                    });
                }
                if !seen.contains(dep.as_str()) {
                    return Err(SetupError::RegistryInvalid {
                        message: format!(
                            "'{}' depends on '{}', which is not declared before it",
                            req.name, dep
                        ),
                    });
                }
            }
            if !seen.insert(req.name.as_str()) {
                return Err(SetupError::RegistryInvalid {
                    message: format!("'{}' is declared twice", req.name),
                });
            }
        }

        for dep in &self.project_install.depends_on {
            if !seen.contains(dep.as_str()) {
                return Err(SetupError::UnknownRequirement { name: dep.clone() });
            }
        }

        Ok(())
    }
}

impl Default for RequirementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
