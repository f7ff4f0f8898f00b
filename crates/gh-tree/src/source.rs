use crate::entry::TreeListing;
use crate::repo::RepoRef;

/// Errors that can occur when asking a remote for repository data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status code, if the remote answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A remote that can describe a repository's file tree.
#[async_trait::async_trait]
pub trait TreeSource: Send + Sync {
    /// The branch to use when the caller did not name one.
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, FetchError>;

    /// The flat, recursive listing of `branch`, in the order the remote reports it.
    async fn fetch_tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, FetchError>;
}

