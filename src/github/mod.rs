//! GitHub organization listing: client, wire types and page cursor.

pub mod client;
pub mod error;
pub mod pages;
pub mod types;

pub use client::{next_page_from_link, GithubClient, RepoLister, DEFAULT_API_URL};
pub use error::GithubError;
pub use pages::{OrgPages, PAGE_SIZE};
pub use types::{RepoPage, Repository};
