//! Reduction of per-target and per-worker outcomes into one verdict

use futures::stream::{Stream, StreamExt};

/// AND-folds outcomes, seeded with `true` so an empty sequence succeeds
pub fn fold_outcomes<I>(outcomes: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    outcomes.into_iter().fold(true, |all_good, ok| all_good && ok)
}

/// Stream counterpart of [`fold_outcomes`].
///
/// Every item is still polled after a failure: the stream drives the work.
pub async fn fold_outcome_stream<S>(outcomes: S) -> bool
where
    S: Stream<Item = bool>,
{
    outcomes
        .fold(true, |all_good, ok| async move { all_good && ok })
        .await
}

/// Aggregate result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub producer_outcomes: Vec<bool>,
    pub worker_outcomes: Vec<bool>,
}

impl RunReport {
    pub fn new(producer_outcomes: Vec<bool>, worker_outcomes: Vec<bool>) -> Self {
        Self {
            producer_outcomes,
            worker_outcomes,
        }
    }

    /// True iff no producer warned and every worker succeeded
    pub fn all_good(&self) -> bool {
        fold_outcomes(
            self.producer_outcomes
                .iter()
                .chain(self.worker_outcomes.iter())
                .copied(),
        )
    }

    pub fn failed_producers(&self) -> usize {
        self.producer_outcomes.iter().filter(|ok| !**ok).count()
    }

    pub fn failed_workers(&self) -> usize {
        self.worker_outcomes.iter().filter(|ok| !**ok).count()
    }

    /// Process exit status: 0 when all good, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.all_good() {
            0
        } else {
            1
        }
    }

    /// One-line human summary of the run
    pub fn summary(&self) -> String {
        if self.all_good() {
            format!(
                "All targets synced ({} producers, {} workers)",
                self.producer_outcomes.len(),
                self.worker_outcomes.len()
            )
        } else {
            format!(
                "Sync finished with problems: {} of {} producers warned, {} of {} workers saw failures",
                self.failed_producers(),
                self.producer_outcomes.len(),
                self.failed_workers(),
                self.worker_outcomes.len()
            )
        }
    }
}
