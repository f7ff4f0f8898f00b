use std::fmt;

/// Classification of a tree entry as reported by the Git Trees API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A `blob`.
    File,
    /// A `tree`.
    Directory,
    /// Anything else, e.g. `commit` for submodules.
    Other(String),
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "blob"),
            Self::Directory => write!(f, "tree"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

impl EntryKind {
    /// Map an API `type` string to a kind. Unknown types are kept verbatim.
    pub fn parse(s: &str) -> Self {
        match s {
            "blob" => Self::File,
            "tree" => Self::Directory,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// One file or directory at a slash-delimited path relative to the repo root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self::new(path, EntryKind::Directory)
    }

    /// Path segments, skipping empty ones produced by stray slashes.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// A flat tree listing as returned by one recursive tree request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub entries: Vec<TreeEntry>,
    /// GitHub cut the listing short; `entries` is incomplete.
    pub truncated: bool,
}

/// Keep only entries at or below `folder`.
///
/// Matching is segment-aware: `src` keeps `src` and `src/lib.rs` but not
/// `srcs/x`. A trailing slash on `folder` is ignored and an empty folder keeps
/// everything.
pub fn filter_by_folder(entries: &[TreeEntry], folder: &str) -> Vec<TreeEntry> {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        return entries.to_vec();
    }

    let prefix = format!("{folder}/");
    entries
        .iter()
        .filter(|entry| entry.path == folder || entry.path.starts_with(&prefix))
        .cloned()
        .collect()
}
