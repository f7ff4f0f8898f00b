use std::collections::BTreeMap;

use crate::entry::{EntryKind, TreeEntry};

/// One path segment in the hierarchy rebuilt from a flat listing.
///
/// Children are keyed by segment name in a `BTreeMap`, so iteration is always
/// in lexicographic order and rendering is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    /// Kind of the entry that ended at this node, or `None` for intermediate
    /// segments no entry named explicitly. The last entry for a path wins.
    pub kind: Option<EntryKind>,
    pub children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: None,
            children: BTreeMap::new(),
        }
    }

    /// Build a hierarchy under an unnamed root.
    ///
    /// Intermediate segments without an explicit directory entry still get
    /// a node, so `a/b/c.txt` alone yields `a` → `b` → `c.txt`.
    pub fn from_entries(entries: &[TreeEntry]) -> Self {
        let mut root = Self::default();
        for entry in entries {
            root.insert(entry);
        }
        root
    }

    fn insert(&mut self, entry: &TreeEntry) {
        let mut segments = entry.segments().peekable();
        if segments.peek().is_none() {
            return;
        }

        let mut current = self;
        for segment in segments {
            current = current
                .children
                .entry(segment.to_owned())
                .or_insert_with(|| Self::named(segment));
        }
        current.kind = Some(entry.kind.clone());
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Re-flatten to the slash-joined paths of every leaf, depth-first in
    /// lexicographic order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for child in self.children.values() {
            child.collect_leaves("", &mut paths);
        }
        paths
    }

    fn collect_leaves(&self, parent: &str, out: &mut Vec<String>) {
        let path = if parent.is_empty() {
            self.name.clone()
        } else {
            format!("{parent}/{}", self.name)
        };

        if self.is_leaf() {
            out.push(path);
            return;
        }

        for child in self.children.values() {
            child.collect_leaves(&path, out);
        }
    }
}
