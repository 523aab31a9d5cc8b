//! User configuration: the JSON document and where to find it

pub mod error;
pub mod file;
pub mod location;

pub use error::ConfigError;
pub use file::{load_config, sample_config, sample_config_json, Config, OrgEntry};
pub use location::{config_location, resolve_config_location, XdgEnv, CONFIG_FILE, PROGRAM_NAME};
