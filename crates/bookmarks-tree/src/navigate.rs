//! Element tree navigation
//!
//! The extractor only needs parent/sibling/child queries, attributes and
//! text. Any parsed document offering those can be walked.

use bookmarks_dom::{Document, DomTree, NodeId};

/// A navigable tree of elements
pub trait ElementTree {
    /// Cheap element handle
    type Element: Copy + Eq;

    /// All elements in document order
    fn elements(&self) -> Vec<Self::Element>;

    /// Lower-case tag name
    fn tag_name(&self, element: Self::Element) -> &str;

    fn parent_element(&self, element: Self::Element) -> Option<Self::Element>;

    fn next_element_sibling(&self, element: Self::Element) -> Option<Self::Element>;

    fn prev_element_sibling(&self, element: Self::Element) -> Option<Self::Element>;

    /// Direct children that are elements, in order
    fn element_children(&self, element: Self::Element) -> Vec<Self::Element>;

    fn attr(&self, element: Self::Element, name: &str) -> Option<&str>;

    /// All descendant text, concatenated
    fn text_content(&self, element: Self::Element) -> String;

    fn is_tag(&self, element: Self::Element, tag: &str) -> bool {
        self.tag_name(element).eq_ignore_ascii_case(tag)
    }
}

impl ElementTree for DomTree {
    type Element = NodeId;

    fn elements(&self) -> Vec<NodeId> {
        self.descendants(self.root())
            .filter(|&id| self.is_element(id))
            .collect()
    }

    fn tag_name(&self, element: NodeId) -> &str {
        DomTree::tag_name(self, element).unwrap_or_default()
    }

    fn parent_element(&self, element: NodeId) -> Option<NodeId> {
        DomTree::parent_element(self, element)
    }

    fn next_element_sibling(&self, element: NodeId) -> Option<NodeId> {
        DomTree::next_element_sibling(self, element)
    }

    fn prev_element_sibling(&self, element: NodeId) -> Option<NodeId> {
        DomTree::prev_element_sibling(self, element)
    }

    fn element_children(&self, element: NodeId) -> Vec<NodeId> {
        DomTree::element_children(self, element).collect()
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        DomTree::attr(self, element, name)
    }

    fn text_content(&self, element: NodeId) -> String {
        DomTree::text_content(self, element)
    }
}

impl ElementTree for Document {
    type Element = NodeId;

    fn elements(&self) -> Vec<NodeId> {
        self.tree().elements()
    }

    fn tag_name(&self, element: NodeId) -> &str {
        ElementTree::tag_name(self.tree(), element)
    }

    fn parent_element(&self, element: NodeId) -> Option<NodeId> {
        self.tree().parent_element(element)
    }

    fn next_element_sibling(&self, element: NodeId) -> Option<NodeId> {
        self.tree().next_element_sibling(element)
    }

    fn prev_element_sibling(&self, element: NodeId) -> Option<NodeId> {
        self.tree().prev_element_sibling(element)
    }

    fn element_children(&self, element: NodeId) -> Vec<NodeId> {
        self.tree().element_children(element).collect()
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        self.tree().attr(element, name)
    }

    fn text_content(&self, element: NodeId) -> String {
        self.tree().text_content(element)
    }
}
