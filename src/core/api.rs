//! Public API for the core module.
//!
//! This module provides the stable public API for the sync engine:
//! - Sync targets and their planned action
//! - The shared work queue and worker pool
//! - Target producers
//! - Outcome aggregation
//!
//! Internal implementation details are not exposed through this API.

// Engine
pub use super::engine::SyncEngine;

// Data model
pub use super::target::{SyncAction, SyncTarget};

// Queue and workers
pub use super::queue::{work_queue, QueueReceiver, QueueSender};
pub use super::worker::{run_worker, sync_target, WorkerPool};

// Producers
pub use super::producer::{produce_org_targets, produce_syncpoint_targets};

// Aggregation
pub use super::outcome::{fold_outcome_stream, fold_outcomes, RunReport};

// Configuration
pub use super::config::{default_concurrency, resolve_concurrency, WORK_QUEUE_CAPACITY};
