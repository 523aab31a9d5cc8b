//! Configuration loading for the command line
//!
//! Finds the configuration document, reads it, and builds the guidance shown
//! to users who do not have one yet.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{config_location, load_config, sample_config_json, Config, ConfigError};

/// Result of looking for the user's configuration
#[derive(Debug)]
pub enum ConfigLoad {
    Loaded(Config),
    /// Nothing found; the path is where the file is expected to live
    Missing(PathBuf),
}

/// Loads the configuration from `explicit` or, when absent, from the XDG search path
pub fn load_user_config(explicit: Option<&Path>) -> Result<ConfigLoad> {
    let location = match explicit {
        Some(path) => path.to_path_buf(),
        None => config_location()?,
    };

    match load_config(&location) {
        Ok(config) => Ok(ConfigLoad::Loaded(config)),
        Err(ConfigError::NotFound(path)) => Ok(ConfigLoad::Missing(path)),
        Err(e) => Err(e.into()),
    }
}

/// Guidance printed when no configuration exists
pub fn missing_config_message(location: &Path) -> Result<String> {
    let sample = sample_config_json()
        .context("Unable to generate a sample configuration")?;
    Ok(format!(
        "No config file! Here's a sample you can put into {}:\n\n{}\n",
        location.display(),
        sample
    ))
}
