use std::time::Duration;

use gh_tree::{FetchError, RepoRef, TreeListing, TreeSource};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::repo_info::{ApiErrorBody, RepoInfo};
use crate::tree::TreeResponse;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = "gh-tree";
const ACCEPT: &str = "application/vnd.github+json";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for talking to the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Personal access token, sent as `Authorization: token <PAT>`.
    pub token: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Reads repository metadata and recursive tree listings from GitHub.
pub struct GitHubTreeClient {
    config: GitHubClientConfig,
    client: reqwest::Client,
}

impl GitHubTreeClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn api_base(&self) -> &str {
        self.config
            .api_base_url
            .as_deref()
            .map(|base| base.trim_end_matches('/'))
            .unwrap_or(DEFAULT_API_BASE)
    }

    /// Appends each segment to the API base, percent-encoding as needed.
    fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, FetchError> {
        let base = self.api_base();
        let mut url = Url::parse(base)
            .map_err(|e| FetchError::Network(format!("invalid API base URL {base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| FetchError::Network(format!("invalid API base URL {base}")))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn build_request(&self, url: Url) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("token {token}"));
        }

        req
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {url}");

        let response = self
            .build_request(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

/// Prefer GitHub's JSON `message`, then the raw body, then the status reason.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.message;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }

    reason.unwrap_or("unknown error").to_owned()
}

#[async_trait::async_trait]
impl TreeSource for GitHubTreeClient {
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, FetchError> {
        let url = self.endpoint(["repos", repo.owner.as_str(), repo.repo.as_str()])?;

        let info: RepoInfo = self.get_json(url).await?;
        debug!("Default branch of {repo} is {}", info.default_branch);

        Ok(info.default_branch)
    }

    async fn fetch_tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, FetchError> {
        // Slashes in branch names stay path separators; everything else is escaped.
        let mut url = self.endpoint(
            ["repos", repo.owner.as_str(), repo.repo.as_str(), "git", "trees"]
                .into_iter()
                .chain(branch.split('/')),
        )?;
        url.query_pairs_mut().append_pair("recursive", "1");

        let response: TreeResponse = self.get_json(url).await?;

        if response.truncated {
            warn!("tree response for {repo} was truncated; results may be incomplete");
        }

        let listing = TreeListing::from(response);
        debug!("Fetched {} entries for {repo}@{branch}", listing.entries.len());

        Ok(listing)
    }
}
