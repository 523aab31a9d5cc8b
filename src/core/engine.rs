//! Wires producers, the work queue and the worker pool into one run

use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::config::WORK_QUEUE_CAPACITY;
use super::outcome::RunReport;
use super::producer::{produce_org_targets, produce_syncpoint_targets};
use super::queue::work_queue;
use super::worker::WorkerPool;
use crate::config::OrgEntry;
use crate::git::GitOps;
use crate::github::RepoLister;

/// The bounded concurrent sync engine.
///
/// All shared primitives are created per [`SyncEngine::run`] call and passed
/// down explicitly; nothing is process-global.
pub struct SyncEngine {
    concurrency: usize,
    verbose: bool,
    queue_capacity: usize,
    git: Arc<dyn GitOps>,
    lister: Arc<dyn RepoLister>,
}

impl SyncEngine {
    pub fn new(
        concurrency: usize,
        verbose: bool,
        git: Arc<dyn GitOps>,
        lister: Arc<dyn RepoLister>,
    ) -> Self {
        Self {
            concurrency: concurrency.max(1),
            verbose,
            queue_capacity: WORK_QUEUE_CAPACITY,
            git,
            lister,
        }
    }

    /// Overrides the work queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Syncs every org repository and syncpoint, returning the aggregate report.
    ///
    /// Producers run concurrently with each other and with the workers. The
    /// queue closes only after the last producer has finished.
    pub async fn run(&self, orgs: &[OrgEntry], syncpoints: &[PathBuf]) -> RunReport {
        let (sender, receiver) = work_queue(self.queue_capacity);
        let pool = WorkerPool::spawn(
            self.concurrency,
            receiver,
            Arc::clone(&self.git),
            self.verbose,
        );
        debug!(
            workers = pool.size(),
            orgs = orgs.len(),
            syncpoints = syncpoints.len(),
            "Starting sync"
        );

        let org_producers: Vec<_> = orgs
            .iter()
            .map(|org| {
                let sender = sender.clone();
                let lister = Arc::clone(&self.lister);
                async move { produce_org_targets(org, lister.as_ref(), &sender).await }
            })
            .collect();
        let syncpoint_producer = {
            let sender = sender.clone();
            async move { produce_syncpoint_targets(syncpoints, &sender).await }
        };
        // Every producer owns a clone, so dropping the root closes the queue
        // as soon as the last producer completes
        drop(sender);

        let (mut producer_outcomes, syncpoint_outcome) =
            futures::join!(join_all(org_producers), syncpoint_producer);
        producer_outcomes.push(syncpoint_outcome);

        let worker_outcomes = pool.join().await;
        RunReport::new(producer_outcomes, worker_outcomes)
    }
}
