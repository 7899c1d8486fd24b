//! Bookmarks Tree
//!
//! Turns a Netscape bookmark export into one rooted tree of folders and links.
//!
//! Two passes over in-memory data:
//! - [`Extractor`] walks the parsed document and yields a flat collection of
//!   folder records, each tagged with the title of its enclosing folder.
//! - [`TreeBuilder`] links those records back together by title, starting from
//!   the record with no parent.
//!
//! # Example
//! ```rust,ignore
//! use bookmarks_tree::{convert, Config};
//!
//! let json = convert(&std::fs::read("bookmarks.html")?, &Config::default())?;
//! println!("{json}");
//! ```

mod build;
mod config;
mod error;
mod extract;
mod model;
mod navigate;
mod output;
mod timestamp;

pub use build::{build_tree, BuildError, BuildReport, BuiltTree, TreeBuilder};
pub use config::{BuildConfig, Config, ExtractConfig, OutputConfig};
pub use error::Error;
pub use extract::Extractor;
pub use model::{BookmarkNode, FlatCollection, RecordId};
pub use navigate::ElementTree;
pub use output::{to_json, to_value};
pub use timestamp::{format_timestamp, parse_timestamp};

pub use bookmarks_dom as dom;
pub use bookmarks_html as html;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse, extract and assemble a bookmark export
pub fn parse_tree(html: &[u8], url: &str, config: &Config) -> Result<BuiltTree, Error> {
    let document = bookmarks_html::parse_bytes(html, url)?;
    let records = Extractor::new(config.extract.clone()).extract(&document);
    Ok(TreeBuilder::new(config.build.clone()).build(records)?)
}

/// Full pipeline: markup in, JSON out
pub fn convert(html: &[u8], config: &Config) -> Result<String, Error> {
    let built = parse_tree(html, "about:blank", config)?;
    Ok(to_json(&built.root, &config.output)?)
}
