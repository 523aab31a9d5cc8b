//! # ghopac
//!
//! `ghopac` keeps a local mirror of GitHub organizations and standalone git
//! checkouts up to date. It powers the `ghopac` CLI tool.
//!
//! ## Core Features
//!
//! - **Organization mirroring**: Every repository of a configured org is
//!   cloned under a local base directory, or pulled if already present.
//! - **Syncpoints**: Standalone checkouts outside any org are pulled too.
//! - **Bounded concurrency**: A fixed-size worker pool drains a shared queue
//!   while producers are still paging through listings.
//! - **Binary verdict**: One pass/fail outcome for the whole run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ghopac::core::SyncEngine;
//! use ghopac::git::GitCli;
//! use ghopac::github::{GithubClient, DEFAULT_API_URL};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let lister = GithubClient::new(DEFAULT_API_URL, None)?;
//!     let engine = SyncEngine::new(4, true, Arc::new(GitCli::new()), Arc::new(lister));
//!     let report = engine.run(&[], &[PathBuf::from("/src/dotfiles")]).await;
//!     std::process::exit(report.exit_code());
//! }
//! ```

pub mod commands;
pub mod config;
pub mod core;
pub mod git;
pub mod github;
pub mod utils;
