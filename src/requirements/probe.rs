//! PATH probing for tool binaries.
//!
//! Presence checks walk the `PATH` entries directly instead of spawning
//! `which`: its behavior varies across systems and it is sometimes a shell
//! builtin with inconsistent exit codes.
//!
//! # Example
//!
//! ```no_run
//! use joshua_setup::requirements::probe::locate;
//!
//! match locate("node") {
//!     Some(path) => println!("node at {}", path.display()),
//!     None => println!("node is not installed"),
//! }
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() || tool.contains(std::path::MAIN_SEPARATOR) {
        return None;
    }

    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Split a PATH-style value into its directories, dropping empty entries.
pub fn parse_path_value(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Parse the system PATH environment variable into a list of directories.
///
/// Read on every call so that tools installed earlier in the run are found.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| parse_path_value(&path))
        .unwrap_or_default()
}

/// Resolve a tool against the current process PATH.
pub fn locate(tool: &str) -> Option<PathBuf> {
    resolve_tool_path(tool, &parse_system_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn resolves_first_match_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_executable(second.path(), "pnpm");
        let expected = write_executable(first.path(), "pnpm");

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(resolve_tool_path("pnpm", &entries), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("eas"), "not a program").unwrap();

        let entries = vec![temp.path().to_path_buf()];
        assert_eq!(resolve_tool_path("eas", &entries), None);
    }

    #[test]
    fn skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("supabase")).unwrap();

        let entries = vec![temp.path().to_path_buf()];
        assert_eq!(resolve_tool_path("supabase", &entries), None);
    }

    #[test]
    fn missing_tool_resolves_to_none() {
        let temp = TempDir::new().unwrap();
        let entries = vec![temp.path().to_path_buf()];
        assert_eq!(resolve_tool_path("node", &entries), None);
    }

    #[test]
    fn rejects_empty_and_path_like_names() {
        let entries = vec![PathBuf::from("/usr/bin")];
        assert_eq!(resolve_tool_path("", &entries), None);
        let nested = format!("bin{}sh", std::path::MAIN_SEPARATOR);
        assert_eq!(resolve_tool_path(&nested, &entries), None);
    }

    #[cfg(unix)]
    #[test]
    fn parse_path_value_drops_empty_entries() {
        let parsed = parse_path_value(OsStr::new("/usr/bin::/bin:"));
        assert_eq!(parsed, vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
    }

    #[test]
    fn locate_missing_command_is_none() {
        assert!(locate("this-command-does-not-exist-12345").is_none());
    }
}
