//! Fixed-size pool of workers draining the shared queue

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::outcome::fold_outcome_stream;
use super::queue::QueueReceiver;
use super::target::{SyncAction, SyncTarget};
use crate::git::{GitOps, Status};

/// Performs the single operation a target needs and reports whether it succeeded
pub async fn sync_target(git: &dyn GitOps, target: &SyncTarget, verbose: bool) -> bool {
    let result = match target.plan(git.exists(target.path())) {
        SyncAction::Pull => git.pull(target.path()).await,
        SyncAction::Clone(origin) => git.clone_repo(origin, target.path()).await,
        SyncAction::Unsyncable => {
            warn!(
                "{} Unable to sync {}: it does not exist and has no clone URL, skipping",
                Status::Warning,
                target.path().display()
            );
            return false;
        }
    };

    match result {
        Ok(()) => {
            if verbose {
                info!("{}\t{}", Status::Ok, target);
            }
            true
        }
        Err(e) => {
            error!("{}\t{} -> {}", Status::Failed, target, e);
            false
        }
    }
}

/// Drains `queue` until it is closed and empty, folding every target's outcome
pub async fn run_worker(queue: QueueReceiver, git: Arc<dyn GitOps>, verbose: bool) -> bool {
    let targets = stream::unfold(queue, |queue| async move {
        let target = queue.pop().await?;
        Some((target, queue))
    });

    let outcomes = targets.then(|target| {
        let git = Arc::clone(&git);
        async move { sync_target(git.as_ref(), &target, verbose).await }
    });

    fold_outcome_stream(outcomes).await
}

/// Handle to a set of running workers
pub struct WorkerPool {
    handles: Vec<JoinHandle<bool>>,
}

impl WorkerPool {
    /// Spawns `size` (at least one) symmetric workers sharing `queue`
    pub fn spawn(size: usize, queue: QueueReceiver, git: Arc<dyn GitOps>, verbose: bool) -> Self {
        let handles = (0..size.max(1))
            .map(|_| tokio::spawn(run_worker(queue.clone(), Arc::clone(&git), verbose)))
            .collect();
        Self { handles }
    }

    pub fn size(&self) -> usize {
        self.handles.len()
    }

    /// Waits for every worker and returns one outcome per worker.
    ///
    /// A worker that panicked counts as failed.
    pub async fn join(self) -> Vec<bool> {
        let mut outcomes = Vec::with_capacity(self.handles.len());
        for (index, handle) in self.handles.into_iter().enumerate() {
            let ok = match handle.await {
                Ok(ok) => ok,
                Err(e) => {
                    error!("{} worker {} stopped abnormally: {}", Status::Failed, index, e);
                    false
                }
            };
            outcomes.push(ok);
        }
        outcomes
    }
}
