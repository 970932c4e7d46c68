//! Project root resolution.
//!
//! The setup tool lives at `<root>/tools/<crate>/`, so the project root is a
//! fixed ancestor of the crate's own manifest directory. It is computed once
//! at compile time and never depends on the caller's working directory.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

/// Directory levels between the crate manifest directory and the project root.
pub const ROOT_DEPTH: usize = 2;

/// The project root this binary was built for.
pub fn default_project_root() -> PathBuf {
    ancestor(Path::new(env!("CARGO_MANIFEST_DIR")), ROOT_DEPTH)
}

/// The ancestor `levels` directories above `dir`, stopping at the filesystem root.
pub fn ancestor(dir: &Path, levels: usize) -> PathBuf {
    dir.ancestors()
        .nth(levels)
        .or_else(|| dir.ancestors().last())
        .unwrap_or(dir)
        .to_path_buf()
}

/// Resolve the directory the project install runs in.
///
/// An explicit path wins over the built-in default. Either way it must be an
/// existing directory; the result is canonical.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_project_root(),
    };

    if !candidate.is_dir() {
        return Err(SetupError::ProjectRootNotFound { path: candidate });
    }

    let root = candidate
        .canonicalize()
        .with_context(|| format!("Failed to resolve project root {}", candidate.display()))?;
    tracing::debug!("Project root: {}", root.display());
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_root_is_fixed_ancestor_of_manifest() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let expected = manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir);
        assert_eq!(default_project_root(), expected);
    }

    #[test]
    fn ancestor_walks_up() {
        let dir = Path::new("/home/dev/joshua/tools/setup");
        assert_eq!(ancestor(dir, 2), PathBuf::from("/home/dev/joshua"));
        assert_eq!(ancestor(dir, 0), dir.to_path_buf());
    }

    #[test]
    fn ancestor_stops_at_filesystem_root() {
        let dir = Path::new("/tools");
        assert_eq!(ancestor(dir, 5), PathBuf::from("/"));
    }

    #[test]
    fn explicit_root_is_canonicalized() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("app");
        std::fs::create_dir(&nested).unwrap();
        let dotted = nested.join("..").join("app");

        let root = resolve_project_root(Some(&dotted)).unwrap();
        assert_eq!(root, nested.canonicalize().unwrap());
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert!(matches!(
            resolve_project_root(Some(&missing)),
            Err(SetupError::ProjectRootNotFound { path }) if path == missing
        ));
    }

    #[test]
    fn file_is_not_a_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("package.json");
        std::fs::write(&file, "{}").unwrap();
        assert!(resolve_project_root(Some(&file)).is_err());
    }
}
