//! Extractor
//!
//! Finds every folder marker (`<H3>` by default) and turns it into a flat
//! record. The hierarchy is only implicit in the markup:
//!
//! ```text
//! <DT><H3>Parent</H3>
//! <DL><p>
//!     <DT><H3>Child</H3>          marker
//!     <DL><p>                     marker's next sibling: its contents
//!         <DT><A HREF=..>Link</A>
//!     </DL><p>
//! </DL><p>
//! ```
//!
//! A marker's links live in the `<DL>` right after it, and its parent is the
//! marker right before the `<DL>` two levels up. Links are attached to their
//! folder record directly; only folders become flat records.

use crate::{parse_timestamp, BookmarkNode, ElementTree, ExtractConfig, FlatCollection};

const LIST: &str = "dl";
const ITEM: &str = "dt";
const LINK: &str = "a";

/// Flat record extractor
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// One record per folder marker, in document order
    pub fn extract<T: ElementTree>(&self, doc: &T) -> FlatCollection {
        let markers: Vec<_> = doc
            .elements()
            .into_iter()
            .filter(|&el| self.is_marker(doc, el))
            .collect();

        tracing::debug!("Found {} folder markers", markers.len());

        let mut records = FlatCollection::new();
        for marker in markers {
            let folder = BookmarkNode::folder(doc.text_content(marker))
                .with_times(
                    timestamp_attr(doc, marker, "add_date"),
                    timestamp_attr(doc, marker, "last_modified"),
                )
                .with_parent(self.parent_title(doc, marker).unwrap_or_default())
                .with_children(self.links(doc, marker));

            records.push(folder);
        }

        tracing::debug!(
            "Extracted {} folder records, {} root candidates",
            records.len(),
            records.root_candidates().len()
        );
        records
    }

    fn is_marker<T: ElementTree>(&self, doc: &T, el: T::Element) -> bool {
        self.config.is_folder_tag(doc.tag_name(el))
    }

    /// Links directly inside the list that follows the marker
    fn links<T: ElementTree>(&self, doc: &T, marker: T::Element) -> Vec<BookmarkNode> {
        let Some(list) = doc
            .next_element_sibling(marker)
            .filter(|&el| doc.is_tag(el, LIST))
        else {
            return Vec::new();
        };

        doc.element_children(list)
            .into_iter()
            .filter(|&item| doc.is_tag(item, ITEM))
            .filter_map(|item| doc.element_children(item).first().copied())
            .filter(|&anchor| doc.is_tag(anchor, LINK))
            .map(|anchor| {
                BookmarkNode::link(
                    doc.text_content(anchor),
                    doc.attr(anchor, "href").unwrap_or_default(),
                )
                .with_times(
                    timestamp_attr(doc, anchor, "add_date"),
                    timestamp_attr(doc, anchor, "last_modified"),
                )
            })
            .collect()
    }

    /// Marker -> enclosing item -> enclosing list -> marker before that list
    fn parent_title<T: ElementTree>(&self, doc: &T, marker: T::Element) -> Option<String> {
        let item = doc.parent_element(marker)?;
        let list = doc
            .parent_element(item)
            .filter(|&el| doc.is_tag(el, LIST))?;
        let parent = doc
            .prev_element_sibling(list)
            .filter(|&el| self.is_marker(doc, el))?;
        Some(doc.text_content(parent))
    }
}

fn timestamp_attr<T: ElementTree>(
    doc: &T,
    el: T::Element,
    name: &str,
) -> Option<chrono::DateTime<chrono::Utc>> {
    parse_timestamp(doc.attr(el, name).unwrap_or_default())
}
