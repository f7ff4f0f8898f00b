pub mod entry;
pub mod materialize;
pub mod node;
pub mod render;
pub mod repo;
pub mod source;

pub use entry::{EntryKind, TreeEntry, TreeListing, filter_by_folder};
pub use materialize::{MaterializeError, MaterializeReport, materialize};
pub use node::TreeNode;
pub use render::{
    TreeCounts, count_entries, render_summary, render_summary_colored, render_tree,
    render_tree_colored,
};
pub use repo::{RepoRef, RepoUrlError, parse_repo_url};
pub use source::{FetchError, TreeSource};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
