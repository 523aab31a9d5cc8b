//! Configuration file discovery following the XDG base directory convention

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

pub const PROGRAM_NAME: &str = "ghopac";
pub const CONFIG_FILE: &str = "config.json";
const XDG_DEFAULT_CONFIG_DIR: &str = "/etc/xdg";

/// Snapshot of the environment values that drive config discovery
#[derive(Debug, Clone, Default)]
pub struct XdgEnv {
    pub config_home: Option<OsString>,
    pub config_dirs: Option<OsString>,
    pub home_dir: Option<PathBuf>,
}

impl XdgEnv {
    /// Reads `XDG_CONFIG_HOME`, `XDG_CONFIG_DIRS` and the user's home directory
    pub fn from_env() -> Self {
        Self {
            config_home: std::env::var_os("XDG_CONFIG_HOME"),
            config_dirs: std::env::var_os("XDG_CONFIG_DIRS"),
            home_dir: dirs::home_dir(),
        }
    }
}

fn is_blank(value: &Option<OsString>) -> bool {
    value
        .as_ref()
        .map_or(true, |v| v.to_string_lossy().trim().is_empty())
}

fn config_path(base: &Path) -> PathBuf {
    base.join(PROGRAM_NAME).join(CONFIG_FILE)
}

/// Resolves where the configuration file lives.
///
/// Returns the first existing candidate, or the location under the config
/// home when none exists so callers can tell the user where to put one.
pub fn resolve_config_location(env: &XdgEnv) -> Result<PathBuf, ConfigError> {
    let config_home = match &env.config_home {
        Some(home) if !is_blank(&env.config_home) => PathBuf::from(home),
        _ => env
            .home_dir
            .as_ref()
            .map(|home| home.join(".config"))
            .ok_or(ConfigError::NoHomeDirectory)?,
    };

    let preferred = config_path(&config_home);
    if preferred.exists() {
        return Ok(preferred);
    }

    let fallback = if is_blank(&env.config_dirs) {
        let candidate = config_path(Path::new(XDG_DEFAULT_CONFIG_DIR));
        candidate.exists().then_some(candidate)
    } else {
        env.config_dirs.as_ref().and_then(|dirs| {
            std::env::split_paths(dirs)
                .filter(|dir| dir.is_absolute())
                .map(|dir| config_path(&dir))
                .find(|candidate| candidate.exists())
        })
    };

    Ok(fallback.unwrap_or(preferred))
}

/// Resolves the configuration location from the live process environment
pub fn config_location() -> Result<PathBuf, ConfigError> {
    resolve_config_location(&XdgEnv::from_env())
}
