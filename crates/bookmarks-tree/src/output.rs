//! JSON output
//!
//! The tree is serialized through a borrowed view so the build-time
//! `parent_title` has nowhere to leak into the output.

use serde::Serialize;

use crate::{format_timestamp, BookmarkNode, OutputConfig};

#[derive(Serialize)]
struct NodeView<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bookmarks: Vec<NodeView<'a>>,
    #[serde(rename = "addAt", skip_serializing_if = "Option::is_none")]
    add_at: Option<String>,
    #[serde(rename = "updateAt", skip_serializing_if = "Option::is_none")]
    update_at: Option<String>,
}

impl<'a> NodeView<'a> {
    fn new(node: &'a BookmarkNode, config: &OutputConfig) -> Self {
        let render = |instant| format_timestamp(instant, config.utc_offset);
        Self {
            title: &node.title,
            url: node.url.as_deref(),
            bookmarks: node
                .children
                .iter()
                .map(|child| NodeView::new(child, config))
                .collect(),
            add_at: node.added_at.map(render),
            update_at: node.modified_at.map(render),
        }
    }
}

/// Serialize a tree to a JSON string
pub fn to_json(tree: &BookmarkNode, config: &OutputConfig) -> Result<String, serde_json::Error> {
    let view = NodeView::new(tree, config);
    if config.pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    }
}

/// Serialize a tree to a JSON value
pub fn to_value(
    tree: &BookmarkNode,
    config: &OutputConfig,
) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(NodeView::new(tree, config))
}
