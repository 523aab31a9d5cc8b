//! The unit of work handed from producers to workers

use std::fmt;
use std::path::{Path, PathBuf};

/// A local path that should hold an up-to-date repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    path: PathBuf,
    origin: Option<String>,
}

/// What a worker will do with a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction<'a> {
    /// Update the existing checkout in place
    Pull,
    /// Materialize a fresh checkout from this origin
    Clone(&'a str),
    /// Nothing exists locally and there is nowhere to clone from
    Unsyncable,
}

impl SyncTarget {
    /// A repository discovered in an organization listing, mirrored under `base`
    pub fn from_org(base: &Path, repo_name: &str, origin: Option<String>) -> Self {
        Self {
            path: base.join(repo_name),
            origin,
        }
    }

    /// A standalone directory that must already be a checkout
    pub fn syncpoint(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Chooses the operation given whether `path` already exists.
    ///
    /// An existing path is always pulled, even if an origin is known.
    pub fn plan(&self, exists: bool) -> SyncAction<'_> {
        if exists {
            SyncAction::Pull
        } else if let Some(origin) = self.origin() {
            SyncAction::Clone(origin)
        } else {
            SyncAction::Unsyncable
        }
    }
}

impl fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "{} - {}", origin, self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}
