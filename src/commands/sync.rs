//! Mirror sync command implementation
//!
//! This module builds the real git and GitHub collaborators from the user's
//! configuration and runs the sync engine over every org and syncpoint.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::{resolve_concurrency, RunReport, SyncEngine};
use crate::git::GitCli;
use crate::github::GithubClient;

/// Command line overrides applied on top of the configuration file
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub jobs: Option<usize>,
    pub verbose: bool,
}

/// Handles the sync command
pub async fn handle_sync_command(config: &Config, options: &SyncOptions) -> Result<RunReport> {
    let concurrency = resolve_concurrency(options.jobs, config.configured_concurrency());
    let verbose = options.verbose || config.is_verbose();

    let lister = GithubClient::new(config.api_url(), config.github_access_token.clone())
        .context("Unable to create GitHub client")?;
    if !lister.is_authenticated() && !config.orgs.is_empty() {
        warn!("No GitHub access token configured, listing organizations anonymously");
    }

    let engine = SyncEngine::new(concurrency, verbose, Arc::new(GitCli::new()), Arc::new(lister));
    let report = engine.run(&config.orgs, &config.syncpoints).await;

    if report.all_good() {
        debug!("{}", report.summary());
    } else {
        warn!("{}", report.summary());
    }

    Ok(report)
}
