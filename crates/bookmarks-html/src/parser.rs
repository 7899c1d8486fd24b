//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena DOM. Bookmark files
//! are legacy markup (`<DT>` without end tags, stray `<p>`), so the tree
//! shape we get is whatever the HTML5 tree builder recovers.

use bookmarks_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::HtmlError;

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        self.finish(&dom, url)
    }

    /// Parse raw bytes, replacing invalid UTF-8 sequences
    pub fn parse_bytes(&self, bytes: &[u8], url: &str) -> Result<Document, HtmlError> {
        tracing::debug!("Parsing {} bytes of HTML: {}", bytes.len(), url);

        let mut input = bytes;
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut input)
            .map_err(|source| HtmlError::Io {
                url: url.to_string(),
                source,
            })?;

        Ok(self.finish(&dom, url))
    }

    fn finish(&self, dom: &RcDom, url: &str) -> Document {
        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root);

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Convert an RcDom node to our DOM format
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                // Whitespace is kept: folder and link titles are raw text content
                let id = tree.create_text(&contents.borrow());
                tree.append_child(parent, id);
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);

                for attr in attrs.borrow().iter() {
                    tree.set_attr(id, &attr.name.local, attr.value.to_string());
                }

                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Bookmarks</title></head><body><h1>Bookmarks</h1></body></html>";
        let doc = HtmlParser::new().parse(html);

        assert!(doc.tree().len() > 1, "Expected more than 1 node, got {}", doc.tree().len());
        assert_eq!(doc.title(), "Bookmarks");
    }

    #[test]
    fn test_parse_bytes_lossy() {
        let html = b"<h3>Caf\xff</h3>";
        let doc = HtmlParser::new().parse_bytes(html, "test.html").unwrap();

        let h3 = doc.first_element("h3").unwrap();
        assert_eq!(doc.tree().text_content(h3), "Caf\u{FFFD}");
        assert_eq!(doc.url(), "test.html");
    }

    #[test]
    fn test_uppercase_names_normalised() {
        let doc = HtmlParser::new().parse(r#"<A HREF="https://example.com" ADD_DATE="1">x</A>"#);

        let a = doc.first_element("a").unwrap();
        assert_eq!(doc.tree().attr(a, "href"), Some("https://example.com"));
        assert_eq!(doc.tree().attr(a, "add_date"), Some("1"));
    }
}
