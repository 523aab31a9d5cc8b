//! Clone and pull operations behind a swappable capability trait

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::error::GitError;
use crate::utils::closest_ancestor_dir;

// Git command arguments
const GIT_PULL_ARGS: &[&str] = &["pull", "--prune"];
const GIT_CLONE_ARG: &str = "clone";

/// The two external version-control operations the sync engine needs.
///
/// Workers only ever talk to git through this trait so the engine can be
/// exercised with an in-memory fake.
#[async_trait]
pub trait GitOps: Send + Sync {
    /// Whether something already exists at `path`
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Materializes a new repository at `destination` from `origin`
    async fn clone_repo(&self, origin: &str, destination: &Path) -> Result<(), GitError>;

    /// Updates the repository at `path` in place, pruning deleted remote branches
    async fn pull(&self, path: &Path) -> Result<(), GitError>;
}

/// `GitOps` implementation that shells out to the `git` binary
#[derive(Clone, Debug, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GitOps for GitCli {
    async fn clone_repo(&self, origin: &str, destination: &Path) -> Result<(), GitError> {
        let workdir = closest_ancestor_dir(destination)
            .ok_or_else(|| GitError::NoParentDirectory(destination.to_path_buf()))?;
        // Relative to workdir so relative destinations are not joined twice
        let relative = destination.strip_prefix(workdir).unwrap_or(destination);
        let destination_arg = if relative.as_os_str().is_empty() {
            ".".to_string()
        } else {
            relative.to_string_lossy().into_owned()
        };
        run_git(workdir, &[GIT_CLONE_ARG, origin, destination_arg.as_str()]).await
    }

    async fn pull(&self, path: &Path) -> Result<(), GitError> {
        if !path.is_dir() {
            return Err(GitError::NotADirectory(path.to_path_buf()));
        }
        run_git(path, GIT_PULL_ARGS).await
    }
}

/// Runs a git command in the specified directory and waits for it to exit.
///
/// stdin is closed so credential prompts fail fast instead of hanging the
/// worker. There is no timeout: a stuck git blocks its worker.
pub async fn run_git(dir: &Path, args: &[&str]) -> Result<(), GitError> {
    debug!("git {} (in {})", args.join(" "), dir.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .await?;

    if output.status.success() {
        return Ok(());
    }

    match output.status.code() {
        Some(code) => Err(GitError::Failed {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
        None => Err(GitError::Signalled),
    }
}
