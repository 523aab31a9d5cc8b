//! Lazy page cursor over an organization listing.

use super::client::RepoLister;
use super::error::Result;
use super::types::RepoPage;

/// Number of repositories requested per listing page
pub const PAGE_SIZE: u32 = 25;

enum Cursor {
    Next(u32),
    Done,
}

/// Finite, non-restartable sequence of listing pages for one organization.
///
/// Yields pages until the API reports no next page. The first error is
/// yielded once and ends the sequence; an empty page alone never does.
pub struct OrgPages<'a> {
    lister: &'a dyn RepoLister,
    org: &'a str,
    cursor: Cursor,
}

impl<'a> OrgPages<'a> {
    pub fn new(lister: &'a dyn RepoLister, org: &'a str) -> Self {
        Self {
            lister,
            org,
            cursor: Cursor::Next(1),
        }
    }

    /// Page number the next call will request, `None` once exhausted
    pub fn current_page(&self) -> Option<u32> {
        match self.cursor {
            Cursor::Next(page) => Some(page),
            Cursor::Done => None,
        }
    }

    /// Fetches the next page, or `None` when the sequence is over
    pub async fn next_page(&mut self) -> Option<Result<RepoPage>> {
        let page = self.current_page()?;
        let result = self.lister.list_page(self.org, page, PAGE_SIZE).await;

        self.cursor = match &result {
            Ok(RepoPage {
                next_page: Some(next),
                ..
            }) if *next > page => Cursor::Next(*next),
            // End of list, an error, or a cursor that would loop back
            _ => Cursor::Done,
        };

        Some(result)
    }
}
