use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use gh_tree::{MaterializeReport, TreeSource, materialize};
use tracing::info;

/// Mirror the repository under `base` as empty directories and files.
///
/// Nothing is written unless both API requests succeed.
pub async fn run(
    source: &dyn TreeSource,
    repo_url: &str,
    branch: Option<&str>,
    base: &Path,
    out: &mut impl Write,
) -> Result<MaterializeReport> {
    let (repo, listing) = super::fetch_listing(source, repo_url, branch).await?;

    let report = materialize(&listing.entries, base).context("creating structure")?;
    info!(
        "Created {} directories and {} files for {repo}",
        report.directories, report.files
    );

    writeln!(out, "Placeholder structure created at: {}", base.display())?;

    Ok(report)
}
