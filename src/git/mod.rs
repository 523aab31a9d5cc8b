pub mod error;
pub mod operations;
pub mod status;

// Re-export commonly used items
pub use error::GitError;
pub use operations::{run_git, GitCli, GitOps};
pub use status::Status;
