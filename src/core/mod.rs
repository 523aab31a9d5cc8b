// Internal modules - not part of public API
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod outcome;
pub(crate) mod producer;
pub(crate) mod queue;
pub(crate) mod target;
pub(crate) mod worker;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
