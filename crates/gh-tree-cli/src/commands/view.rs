use std::io::Write;

use anyhow::Result;
use gh_tree::{
    TreeSource, count_entries, filter_by_folder, render_summary, render_summary_colored,
    render_tree, render_tree_colored,
};

/// Print the repository as a box-drawing tree followed by folder and file totals.
///
/// With `color`, each name gets a kind icon and color, and so do the totals.
pub async fn run(
    source: &dyn TreeSource,
    repo_url: &str,
    branch: Option<&str>,
    folder: Option<&str>,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let (_, listing) = super::fetch_listing(source, repo_url, branch).await?;

    let entries = match folder {
        Some(folder) => filter_by_folder(&listing.entries, folder),
        None => listing.entries,
    };

    let counts = count_entries(&entries);
    if color {
        write!(out, "{}", render_tree_colored(&entries))?;
        write!(out, "{}", render_summary_colored(&counts))?;
    } else {
        write!(out, "{}", render_tree(&entries))?;
        write!(out, "{}", render_summary(&counts))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use gh_tree::test_support::InMemoryTreeSource;
    use gh_tree::{RepoRef, TreeEntry, TreeListing};

    use super::*;

    fn source() -> InMemoryTreeSource {
        InMemoryTreeSource::new()
            .with_default_branch(RepoRef::new("acme", "widgets"), "main")
            .with_tree(
                RepoRef::new("acme", "widgets"),
                "main",
                TreeListing {
                    entries: vec![
                        TreeEntry::directory("src"),
                        TreeEntry::file("src/main.go"),
                        TreeEntry::file("README.md"),
                    ],
                    truncated: false,
                },
            )
    }

    async fn render(
        source: &InMemoryTreeSource,
        url: &str,
        branch: Option<&str>,
        folder: Option<&str>,
    ) -> Result<String> {
        let mut out = Vec::new();
        run(source, url, branch, folder, false, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    #[tokio::test]
    async fn prints_tree_and_totals() {
        let output = render(&source(), "https://github.com/acme/widgets.git", None, None)
            .await
            .unwrap();

        assert_eq!(
            output,
            "├── README.md\n└── src\n    └── main.go\n\nTotal folders: 1\nTotal files: 2\n"
        );
    }

    #[tokio::test]
    async fn folder_filter_limits_output_and_counts() {
        let output = render(&source(), "acme/widgets", Some("main"), Some("src"))
            .await
            .unwrap();

        assert_eq!(
            output,
            "└── src\n    └── main.go\n\nTotal folders: 1\nTotal files: 1\n"
        );
    }

    #[tokio::test]
    async fn explicit_branch_skips_default_branch_lookup() {
        let source = source();
        render(&source, "acme/widgets", Some("main"), None)
            .await
            .unwrap();
        assert_eq!(source.requests(), vec!["tree:acme/widgets@main"]);
    }

    #[tokio::test]
    async fn invalid_url_makes_no_requests() {
        let source = source();
        let err = render(&source, "widgets", None, None).await.unwrap_err();

        assert!(err.to_string().contains("invalid GitHub repository URL"));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_branch_reports_status() {
        let err = render(&source(), "acme/widgets", Some("gone"), None)
            .await
            .unwrap_err();

        let fetch = err.downcast_ref::<gh_tree::FetchError>().unwrap();
        assert_eq!(fetch.status(), Some(404));
        assert!(format!("{err:#}").starts_with("fetching tree data: API error 404"));
    }

    #[tokio::test]
    async fn color_adds_kind_icons_to_every_line() {
        let mut out = Vec::new();
        run(&source(), "acme/widgets", None, None, true, &mut out)
            .await
            .unwrap();
        let output = String::from_utf8(out).unwrap();

        let tree: Vec<&str> = output.lines().take(3).collect();
        for (line, prefix, icon, name) in [
            (tree[0], "├── ", "📄", "README.md"),
            (tree[1], "└── ", "📁", "src"),
            (tree[2], "    └── ", "📄", "main.go"),
        ] {
            assert!(line.starts_with(prefix), "{line:?}");
            assert!(line.contains(icon), "{line:?}");
            assert!(line.contains(name), "{line:?}");
        }
        assert!(output.contains("Total folders: "));
        assert!(output.contains("Total files: "));
    }

    #[tokio::test]
    async fn plain_output_has_no_icons() {
        let output = render(&source(), "acme/widgets", None, None).await.unwrap();
        assert!(!output.contains("📄"));
        assert!(!output.contains("📁"));
        assert!(!output.contains('\u{1b}'));
    }
}
