use std::collections::HashMap;
use std::sync::Mutex;

use crate::{FetchError, RepoRef, TreeListing, TreeSource};

/// In-memory tree source for testing. Records every request it serves.
#[derive(Default)]
pub struct InMemoryTreeSource {
    default_branches: HashMap<RepoRef, String>,
    trees: HashMap<(RepoRef, String), TreeListing>,
    requests: Mutex<Vec<String>>,
}

impl InMemoryTreeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_branch(mut self, repo: RepoRef, branch: impl Into<String>) -> Self {
        self.default_branches.insert(repo, branch.into());
        self
    }

    pub fn with_tree(mut self, repo: RepoRef, branch: impl Into<String>, listing: TreeListing) -> Self {
        self.trees.insert((repo, branch.into()), listing);
        self
    }

    /// Requests served so far, as `branch:<repo>` or `tree:<repo>@<branch>`.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, request: String) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

#[async_trait::async_trait]
impl TreeSource for InMemoryTreeSource {
    async fn default_branch(&self, repo: &RepoRef) -> Result<String, FetchError> {
        self.record(format!("branch:{repo}"));
        self.default_branches
            .get(repo)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                message: "Not Found".into(),
            })
    }

    async fn fetch_tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeListing, FetchError> {
        self.record(format!("tree:{repo}@{branch}"));
        self.trees
            .get(&(repo.clone(), branch.to_owned()))
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                message: "Not Found".into(),
            })
    }
}
