//! Errors produced by external git invocations

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single clone or pull
#[derive(Error, Debug)]
pub enum GitError {
    /// The git process could not be started
    #[error("unable to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// git ran and exited with a non-zero status
    #[error("git exited with status {code}:\n----> stdout [{stdout}]\n----> stderr [{stderr}]")]
    Failed {
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// git was terminated by a signal before reporting a status
    #[error("git was killed externally by a signal")]
    Signalled,

    /// The target path exists but cannot hold a repository
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// No existing ancestor directory to run the clone from
    #[error("no existing parent directory for {0}")]
    NoParentDirectory(PathBuf),
}
