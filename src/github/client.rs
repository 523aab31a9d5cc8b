//! GitHub REST client for listing organization repositories.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use super::error::{GithubError, Result};
use super::types::{RepoPage, Repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Source of paginated organization repository listings.
#[async_trait]
pub trait RepoLister: Send + Sync {
    /// Fetches one page (1-based) of `org`'s repositories.
    async fn list_page(&self, org: &str, page: u32, per_page: u32) -> Result<RepoPage>;
}

/// Lists repositories through the GitHub REST API.
///
/// # Example
///
/// ```ignore
/// let client = GithubClient::new(DEFAULT_API_URL, Some("ghp_token".into()))?;
/// let page = client.list_page("rust-lang", 1, 25).await?;
/// println!("{} repos, more: {}", page.repositories.len(), page.next_page.is_some());
/// ```
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client for `api_url`, authenticating with `token` when it is non-blank.
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self> {
        let api_url = api_url.trim_end_matches('/').to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(GithubError::InvalidUrl(format!(
                "{api_url} must start with http:// or https://"
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("ghopac/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let token = token.filter(|t| !t.trim().is_empty());

        Ok(Self {
            http,
            api_url,
            token,
        })
    }

    /// Whether requests carry a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl RepoLister for GithubClient {
    async fn list_page(&self, org: &str, page: u32, per_page: u32) -> Result<RepoPage> {
        let url = format!("{}/orgs/{}/repos", self.api_url, org);
        debug!(org = %org, page, "Fetching repository list page");

        let mut request = self
            .http
            .get(&url)
            .query(&[("per_page", per_page), ("page", page)])
            .header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_from_link);

        let repositories: Vec<Repository> = response
            .json()
            .await
            .map_err(|e| GithubError::Parse(e.to_string()))?;

        Ok(RepoPage {
            repositories,
            next_page,
        })
    }
}

/// Extracts the `page` query parameter of the `rel="next"` entry of a Link header.
pub fn next_page_from_link(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| param.trim() == "rel=\"next\"");
        if !is_next {
            return None;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}
