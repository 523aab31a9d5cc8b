//! Wire types for the repository listing endpoint.

use serde::{Deserialize, Serialize};

/// One repository entry returned by `GET /orgs/{org}/repos`.
///
/// Only the fields the mirror needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub ssh_url: Option<String>,
}

impl Repository {
    /// The reference used to clone this repository, if GitHub provided one.
    pub fn clone_reference(&self) -> Option<&str> {
        self.ssh_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// A single page of an organization listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoPage {
    pub repositories: Vec<Repository>,
    /// Cursor for the following page, `None` once the listing is exhausted
    pub next_page: Option<u32>,
}
