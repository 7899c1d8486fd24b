//! Document - High-level document API

use crate::{DomTree, NodeId};

/// Parsed HTML document
#[derive(Debug, Default)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Where the markup came from (file path or `about:blank`)
    url: String,
}

impl Document {
    /// Create a document with an empty tree
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first `<title>` element, empty if there is none
    pub fn title(&self) -> String {
        self.first_element("title")
            .map(|id| self.tree.text_content(id))
            .unwrap_or_default()
    }

    /// First element with the given tag, in document order
    pub fn first_element(&self, tag: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&id| self.tree.is_element_named(id, tag))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}
