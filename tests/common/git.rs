//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Sets up a git repository with user config
/// Returns Ok(()) on success, or an error if git is not available
pub fn setup_git_repo(path: &Path) -> Result<()> {
    // Initialize git repo
    let init_result = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    configure_test_user(path)
}

/// Applies the identity and signing settings tests need to commit
pub fn configure_test_user(path: &Path) -> Result<()> {
    for args in [
        ["config", "user.name", "Test User"],
        ["config", "user.email", "test@example.com"],
        ["config", "commit.gpgsign", "false"],
    ] {
        Command::new("git").args(args).current_dir(path).output()?;
    }
    Ok(())
}

/// Creates a test commit in the repository
pub fn create_test_commit(
    path: &Path,
    file_name: &str,
    content: &str,
    message: &str,
) -> Result<()> {
    // Write file
    std::fs::write(path.join(file_name), content)?;

    // Stage file
    Command::new("git")
        .args(["add", file_name])
        .current_dir(path)
        .output()?;

    // Commit
    let commit_result = Command::new("git")
        .args(["commit", "-q", "-m", message])
        .current_dir(path)
        .output()?;

    if !commit_result.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&commit_result.stderr)
        );
    }

    Ok(())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
