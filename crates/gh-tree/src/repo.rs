use std::fmt;

/// Error returned when a string does not name an `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid GitHub repository URL: {0}")]
pub struct RepoUrlError(pub String);

/// An `owner/repo` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Extract owner and repository from a GitHub URL or `owner/repo` string.
///
/// Accepted forms include:
/// - `https://github.com/owner/repo`
/// - `https://github.com/owner/repo.git`
/// - `github.com/owner/repo/`
/// - `owner/repo`
///
/// The last two non-empty path segments are used, so hosts are not checked.
/// Whether the repository exists is left for the API to report.
pub fn parse_repo_url(input: &str) -> Result<RepoRef, RepoUrlError> {
    let trimmed = input.trim();
    let without_slash = trimmed.trim_end_matches('/');
    let without_git = without_slash.strip_suffix(".git").unwrap_or(without_slash);

    let segments: Vec<&str> = without_git
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [.., owner, repo] => Ok(RepoRef::new(*owner, *repo)),
        _ => Err(RepoUrlError(input.to_owned())),
    }
}
