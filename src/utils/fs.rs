//! File system utilities

use std::path::Path;

/// Returns true when `path` exists on disk (file, directory or resolvable symlink)
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Walks up from `path` and returns the nearest ancestor (or `path` itself)
/// that exists and is a directory
pub fn closest_ancestor_dir(path: &Path) -> Option<&Path> {
    path.ancestors().find(|candidate| {
        // An empty relative parent means the current directory
        !candidate.as_os_str().is_empty() && candidate.is_dir()
    })
}
