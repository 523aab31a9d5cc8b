pub(crate) mod fs;

// Public API - utilities used by the engine and commands
pub use fs::{closest_ancestor_dir, path_exists};
