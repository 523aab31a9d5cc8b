//! Command handlers invoked by the binary

pub mod config;
pub mod sync;

pub use config::{load_user_config, missing_config_message, ConfigLoad};
pub use sync::{handle_sync_command, SyncOptions};
