//! Engine configuration constants and settings

// Capacity of the shared work queue; producers wait when workers fall this far behind
pub const WORK_QUEUE_CAPACITY: usize = 1000;

/// Determines the worker count from CLI args, the config file and system resources
///
/// Priority order:
/// 1. positive --jobs N flag → N
/// 2. positive `concurrency` from the config file → N
/// 3. Default → number of CPUs (at least 1)
pub fn resolve_concurrency(jobs: Option<usize>, configured: Option<usize>) -> usize {
    if let Some(n) = jobs.filter(|&n| n > 0) {
        return n;
    }

    if let Some(n) = configured.filter(|&n| n > 0) {
        return n;
    }

    default_concurrency()
}

/// Host-derived parallelism hint
pub fn default_concurrency() -> usize {
    num_cpus::get().max(1)
}
