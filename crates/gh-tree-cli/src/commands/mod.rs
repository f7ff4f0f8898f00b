pub mod touch;
pub mod view;

use anyhow::{Context, Result};
use gh_tree::{RepoRef, TreeListing, TreeSource, parse_repo_url};
use tracing::info;

/// Parse the repository argument and fetch its listing, resolving the
/// default branch when none was given.
pub async fn fetch_listing(
    source: &dyn TreeSource,
    repo_url: &str,
    branch: Option<&str>,
) -> Result<(RepoRef, TreeListing)> {
    let repo = parse_repo_url(repo_url)?;

    let branch = match branch {
        Some(branch) => branch.to_owned(),
        None => source
            .default_branch(&repo)
            .await
            .context("fetching repo info")?,
    };

    info!("Fetching tree for {repo}@{branch}");

    let listing = source
        .fetch_tree(&repo, &branch)
        .await
        .context("fetching tree data")?;

    Ok((repo, listing))
}
