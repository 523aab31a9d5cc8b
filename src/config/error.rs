//! Errors raised while locating or reading the configuration document

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration file exists at any searched location
    #[error("No config file found, expected one at {0}")]
    NotFound(PathBuf),

    #[error("Unable to read your config file[{path}]: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't parse your config file[{path}]. Try removing it and running again. ({source})")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Neither XDG_CONFIG_HOME nor a home directory is available
    #[error("Unable to determine current user, please set XDG_CONFIG_HOME explicitly")]
    NoHomeDirectory,
}
