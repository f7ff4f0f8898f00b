use serde::Deserialize;

/// Response from GitHub's Repositories API.
/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub struct RepoInfo {
    pub default_branch: String,
}

/// Error body GitHub sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
