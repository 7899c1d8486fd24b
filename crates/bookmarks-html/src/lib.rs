//! Bookmarks HTML Parser
//!
//! Runs html5ever over a bookmark export and converts the result into the
//! arena DOM from `bookmarks-dom`.

mod parser;

pub use bookmarks_dom::{Document, DomTree, Node, NodeId};
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Parse raw bytes (decoded as lossy UTF-8) into a Document
pub fn parse_bytes(bytes: &[u8], url: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse_bytes(bytes, url)
}

/// HTML front end error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read markup from {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
