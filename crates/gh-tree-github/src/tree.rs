use gh_tree::{EntryKind, TreeEntry, TreeListing};
use serde::Deserialize;

/// Response from GitHub's Git Trees API.
/// `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<RawTreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// A single entry in the tree, as GitHub spells it.
#[derive(Debug, Deserialize)]
pub struct RawTreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl From<RawTreeEntry> for TreeEntry {
    fn from(raw: RawTreeEntry) -> Self {
        TreeEntry::new(raw.path, EntryKind::parse(&raw.entry_type))
    }
}

impl From<TreeResponse> for TreeListing {
    fn from(response: TreeResponse) -> Self {
        TreeListing {
            entries: response.tree.into_iter().map(TreeEntry::from).collect(),
            truncated: response.truncated,
        }
    }
}
