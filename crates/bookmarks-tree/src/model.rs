//! Bookmark data model
//!
//! One node type serves both folders and links. Folders have no `url`;
//! links have no children.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// A folder or link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkNode {
    /// Display text, may be empty and is not unique
    pub title: String,
    /// Present only on links (empty string if `href` was missing)
    pub url: Option<String>,
    /// Title of the enclosing folder, empty for a root candidate.
    /// Only meaningful on flat records; never serialized.
    pub parent_title: String,
    pub children: Vec<BookmarkNode>,
    pub added_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl BookmarkNode {
    pub fn folder(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent_title: impl Into<String>) -> Self {
        self.parent_title = parent_title.into();
        self
    }

    pub fn with_times(
        mut self,
        added_at: Option<DateTime<Utc>>,
        modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.added_at = added_at;
        self.modified_at = modified_at;
        self
    }

    pub fn with_children(mut self, children: Vec<BookmarkNode>) -> Self {
        self.children = children;
        self
    }

    #[inline]
    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }

    /// A flat record with no enclosing folder
    #[inline]
    pub fn is_root_candidate(&self) -> bool {
        self.parent_title.is_empty()
    }

    /// Number of nodes in this subtree, itself included
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(BookmarkNode::len).sum::<usize>()
    }

    /// The default node (empty title, no children) is what a failed build returns
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// First node with the given title, pre-order
    pub fn find(&self, title: &str) -> Option<&BookmarkNode> {
        if self.title == title {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(title))
    }

    /// Iterate over all nodes of the subtree, pre-order
    pub fn iter(&self) -> impl Iterator<Item = &BookmarkNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// Stable identity of a flat record (its discovery index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u32);

impl RecordId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Flat records in discovery order, indexed by title
#[derive(Debug, Clone, Default)]
pub struct FlatCollection {
    records: Vec<BookmarkNode>,
    by_title: HashMap<String, Vec<RecordId>>,
}

impl FlatCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BookmarkNode) -> RecordId {
        let id = RecordId(self.records.len() as u32);
        self.by_title
            .entry(record.title.clone())
            .or_default()
            .push(id);
        self.records.push(record);
        id
    }

    pub fn get(&self, id: RecordId) -> Option<&BookmarkNode> {
        self.records.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &BookmarkNode)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (RecordId(i as u32), record))
    }

    /// Records with an empty parent title, in discovery order
    pub fn root_candidates(&self) -> Vec<RecordId> {
        self.iter()
            .filter(|(_, record)| record.is_root_candidate())
            .map(|(id, _)| id)
            .collect()
    }

    /// Every record carrying `title`, in discovery order
    pub fn ids_with_title(&self, title: &str) -> &[RecordId] {
        self.by_title
            .get(title)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Titles shared by more than one record, in order of first appearance
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut dups: Vec<_> = self
            .by_title
            .iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(title, ids)| (ids[0], title.as_str()))
            .collect();
        dups.sort_unstable();
        dups.into_iter().map(|(_, title)| title).collect()
    }

    pub fn into_records(self) -> Vec<BookmarkNode> {
        self.records
    }
}

impl FromIterator<BookmarkNode> for FlatCollection {
    fn from_iter<I: IntoIterator<Item = BookmarkNode>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.push(record);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlatCollection {
        [
            BookmarkNode::folder("Root"),
            BookmarkNode::folder("Work").with_parent("Root"),
            BookmarkNode::folder("Home").with_parent("Root"),
            BookmarkNode::folder("Work").with_parent("Home"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_root_candidates() {
        let records = sample();
        assert_eq!(records.root_candidates(), [RecordId(0)]);
    }

    #[test]
    fn test_title_index() {
        let records = sample();
        assert_eq!(records.ids_with_title("Work"), [RecordId(1), RecordId(3)]);
        assert!(records.ids_with_title("Missing").is_empty());
        assert_eq!(records.duplicate_titles(), ["Work"]);
    }

    #[test]
    fn test_link_and_folder() {
        let link = BookmarkNode::link("Rust", "");
        assert!(link.is_link());
        assert_eq!(link.url.as_deref(), Some(""));
        assert!(BookmarkNode::folder("Docs").is_folder());
    }

    #[test]
    fn test_len_find_iter() {
        let tree = BookmarkNode::folder("Root").with_children(vec![
            BookmarkNode::link("a", "https://a.example"),
            BookmarkNode::folder("Sub")
                .with_children(vec![BookmarkNode::link("b", "https://b.example")]),
        ]);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.find("b").and_then(|n| n.url.as_deref()), Some("https://b.example"));
        let titles: Vec<_> = tree.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Root", "a", "Sub", "b"]);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(BookmarkNode::default().is_empty());
        assert!(!BookmarkNode::folder("x").is_empty());
    }
}
