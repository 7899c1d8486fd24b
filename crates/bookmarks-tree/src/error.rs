//! Error types

use crate::BuildError;

/// Pipeline error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Html(#[from] bookmarks_html::HtmlError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Failed to serialize bookmark tree: {0}")]
    Serialize(#[from] serde_json::Error),
}
