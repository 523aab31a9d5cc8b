//! In-memory stand-ins for git and the GitHub listing API

use async_trait::async_trait;
use ghopac::git::{GitError, GitOps};
use ghopac::github::{GithubError, RepoLister, RepoPage, Repository};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// A git operation recorded by [`FakeGit`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitCall {
    Clone { origin: String, destination: PathBuf },
    Pull(PathBuf),
}

/// `GitOps` fake with a virtual filesystem.
///
/// Successful clones create the destination, so a second run sees it.
#[derive(Default)]
pub struct FakeGit {
    existing: Mutex<HashSet<PathBuf>>,
    failing: HashSet<PathBuf>,
    calls: Mutex<Vec<GitCall>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.existing
            .lock()
            .unwrap()
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_failing<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.failing.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Makes every operation take `delay`, so work spreads across workers
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of operations that were running at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn clones(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, GitCall::Clone { .. }))
            .count()
    }

    pub fn pulls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, GitCall::Pull(_)))
            .count()
    }

    async fn finish(&self, path: &Path) -> Result<(), GitError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.failing.contains(path) {
            return Err(GitError::Failed {
                code: 128,
                stdout: String::new(),
                stderr: format!("fatal: could not sync {}", path.display()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl GitOps for FakeGit {
    fn exists(&self, path: &Path) -> bool {
        self.existing.lock().unwrap().contains(path)
    }

    async fn clone_repo(&self, origin: &str, destination: &Path) -> Result<(), GitError> {
        self.calls.lock().unwrap().push(GitCall::Clone {
            origin: origin.to_string(),
            destination: destination.to_path_buf(),
        });
        self.finish(destination).await?;
        self.existing
            .lock()
            .unwrap()
            .insert(destination.to_path_buf());
        Ok(())
    }

    async fn pull(&self, path: &Path) -> Result<(), GitError> {
        self.calls
            .lock()
            .unwrap()
            .push(GitCall::Pull(path.to_path_buf()));
        self.finish(path).await
    }
}

/// Lister serving `pages` pages of `per_page` generated repositories per org
pub struct PagedLister {
    pages: u32,
    per_page: usize,
    failing_page: Option<u32>,
    requests: Mutex<Vec<(String, u32)>>,
    page_sizes: Mutex<Vec<u32>>,
}

impl PagedLister {
    pub fn new(pages: u32, per_page: usize) -> Self {
        Self {
            pages,
            per_page,
            failing_page: None,
            requests: Mutex::new(Vec::new()),
            page_sizes: Mutex::new(Vec::new()),
        }
    }

    /// Makes the request for `page` fail
    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().unwrap().clone()
    }

    /// `per_page` of every request, in arrival order
    pub fn page_sizes(&self) -> Vec<u32> {
        self.page_sizes.lock().unwrap().clone()
    }

    pub fn ssh_url(org: &str, name: &str) -> String {
        format!("git@github.com:{org}/{name}.git")
    }
}

#[async_trait]
impl RepoLister for PagedLister {
    async fn list_page(
        &self,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<RepoPage, GithubError> {
        self.requests.lock().unwrap().push((org.to_string(), page));
        self.page_sizes.lock().unwrap().push(per_page);

        if self.failing_page == Some(page) {
            return Err(GithubError::Api {
                status: 500,
                message: "Internal Server Error".into(),
            });
        }

        let repositories = (0..self.per_page)
            .map(|i| {
                let name = format!("repo-{page}-{i}");
                Repository {
                    ssh_url: Some(Self::ssh_url(org, &name)),
                    name,
                }
            })
            .collect();

        Ok(RepoPage {
            repositories,
            next_page: (page < self.pages).then_some(page + 1),
        })
    }
}
