//! Producers that turn configuration entries into queued sync targets
//!
//! Each producer returns its own outcome: `false` means it hit a problem
//! that should fail the run, even though it never stops other producers.

use std::path::PathBuf;
use tracing::{debug, warn};

use super::queue::QueueSender;
use super::target::SyncTarget;
use crate::config::OrgEntry;
use crate::git::Status;
use crate::github::{OrgPages, RepoLister};
use crate::utils::path_exists;

/// Queues every repository of one organization.
///
/// The org's base directory must exist; listing stops at the first page error.
pub async fn produce_org_targets(
    org: &OrgEntry,
    lister: &dyn RepoLister,
    queue: &QueueSender,
) -> bool {
    if !path_exists(&org.path) {
        warn!(
            "{} Source directory {} for org {} does not exist, skipping.",
            Status::Warning,
            org.path.display(),
            org.org
        );
        return false;
    }

    let mut pages = OrgPages::new(lister, &org.org);
    let mut queued = 0usize;
    loop {
        let page_number = pages.current_page();
        let page = match pages.next_page().await {
            None => break,
            Some(Ok(page)) => page,
            Some(Err(e)) => {
                warn!(
                    "{} Problem accessing org `{}` repository list page {}: {}",
                    Status::Warning,
                    org.org,
                    page_number.unwrap_or_default(),
                    e
                );
                return false;
            }
        };

        for repo in page.repositories {
            let origin = repo.clone_reference().map(str::to_string);
            let target = SyncTarget::from_org(&org.path, &repo.name, origin);
            if let Err(rejected) = queue.push(target).await {
                warn!(
                    "{} Work queue closed before {} could be queued",
                    Status::Warning,
                    rejected
                );
                return false;
            }
            queued += 1;
        }
    }

    debug!(org = %org.org, queued, "Finished listing organization");
    true
}

/// Queues every standalone syncpoint that exists; missing ones are reported
pub async fn produce_syncpoint_targets(syncpoints: &[PathBuf], queue: &QueueSender) -> bool {
    let mut all_good = true;
    for syncpoint in syncpoints {
        if !path_exists(syncpoint) {
            warn!(
                "{} Source directory {} does not exist, skipping.",
                Status::Warning,
                syncpoint.display()
            );
            all_good = false;
            continue;
        }

        if let Err(rejected) = queue.push(SyncTarget::syncpoint(syncpoint.clone())).await {
            warn!(
                "{} Work queue closed before {} could be queued",
                Status::Warning,
                rejected
            );
            return false;
        }
    }
    all_good
}
