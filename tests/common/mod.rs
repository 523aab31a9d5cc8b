//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fakes;
pub mod git;

pub use self::fakes::{FakeGit, GitCall, PagedLister};
pub use self::git::{create_test_commit, is_git_available, setup_git_repo};
