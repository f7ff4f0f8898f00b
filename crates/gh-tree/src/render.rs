use colored::{Color, Colorize};

use crate::entry::{EntryKind, TreeEntry};
use crate::node::TreeNode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

const FOLDER_ICON: &str = "📁";
const FILE_ICON: &str = "📄";
const OTHER_ICON: &str = "❓";

/// Folder and file totals for a flat listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub folders: usize,
    pub files: usize,
}

/// Count directory and file entries. Other kinds count toward neither.
pub fn count_entries(entries: &[TreeEntry]) -> TreeCounts {
    entries
        .iter()
        .fold(TreeCounts::default(), |mut counts, entry| {
            match entry.kind {
                EntryKind::Directory => counts.folders += 1,
                EntryKind::File => counts.files += 1,
                EntryKind::Other(_) => {}
            }
            counts
        })
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Plain,
    Colored,
}

/// Render a flat listing as a box-drawing diagram, one line per node.
///
/// ```text
/// ├── README.md
/// └── src
///     └── main.go
/// ```
pub fn render_tree(entries: &[TreeEntry]) -> String {
    render(&TreeNode::from_entries(entries), Style::Plain)
}

/// Same layout as [`render_tree`], with an icon before each name and the
/// line colored by kind: folders blue, files green, anything else yellow.
///
/// Whether escape codes are emitted follows `colored`'s terminal and
/// `NO_COLOR`/`CLICOLOR_FORCE` handling; the icons are always drawn.
pub fn render_tree_colored(entries: &[TreeEntry]) -> String {
    render(&TreeNode::from_entries(entries), Style::Colored)
}

fn render(root: &TreeNode, style: Style) -> String {
    let mut out = String::new();
    write_children(root, "", style, &mut out);
    out
}

fn write_children(node: &TreeNode, prefix: &str, style: Style, out: &mut String) {
    let last_index = node.children.len().saturating_sub(1);

    for (i, child) in node.children.values().enumerate() {
        let is_last = i == last_index;

        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        match style {
            Style::Plain => out.push_str(&child.name),
            Style::Colored => out.push_str(&decorate(child)),
        }
        out.push('\n');

        let child_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
        write_children(child, &child_prefix, style, out);
    }
}

fn decorate(node: &TreeNode) -> String {
    let (icon, color) = match &node.kind {
        Some(EntryKind::Directory) => (FOLDER_ICON, Color::Blue),
        Some(EntryKind::File) => (FILE_ICON, Color::Green),
        // Synthesized from a deeper path, so it holds something.
        None if !node.is_leaf() => (FOLDER_ICON, Color::Blue),
        _ => (OTHER_ICON, Color::Yellow),
    };

    format!("{} {}", icon.color(color), node.name.as_str().color(color))
}

/// The totals block printed after a tree.
pub fn render_summary(counts: &TreeCounts) -> String {
    format!(
        "\nTotal folders: {}\nTotal files: {}\n",
        counts.folders, counts.files
    )
}

/// [`render_summary`] with the folder total in blue and the file total in green.
pub fn render_summary_colored(counts: &TreeCounts) -> String {
    format!(
        "\nTotal folders: {}\nTotal files: {}\n",
        counts.folders.to_string().as_str().blue(),
        counts.files.to_string().as_str().green()
    )
}
