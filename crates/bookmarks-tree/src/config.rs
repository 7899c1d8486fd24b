//! Conversion Configuration

use chrono::{FixedOffset, Offset, Utc};

/// Conversion options
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub build: BuildConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Fail on duplicate titles and multiple root candidates
    pub fn strict(mut self) -> Self {
        self.build.strict = true;
        self
    }

    /// Treat the document `<H1>` as the root folder
    pub fn with_root_heading(mut self) -> Self {
        self.extract = self.extract.with_root_heading();
        self
    }

    /// Indent the JSON output
    pub fn pretty(mut self) -> Self {
        self.output.pretty = true;
        self
    }

    /// Render timestamps in a fixed offset instead of UTC
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.output.utc_offset = offset;
        self
    }
}

/// Extractor options
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Tags that mark a folder (lower-case)
    pub folder_tags: Vec<String>,
}

impl ExtractConfig {
    pub fn with_root_heading(mut self) -> Self {
        if !self.folder_tags.iter().any(|t| t == "h1") {
            self.folder_tags.insert(0, "h1".to_string());
        }
        self
    }

    /// Whether `tag` marks a folder
    pub fn is_folder_tag(&self, tag: &str) -> bool {
        self.folder_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            folder_tags: vec!["h3".to_string()],
        }
    }
}

/// Tree builder options
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Reject duplicate folder titles and ambiguous roots instead of
    /// resolving them first-match-wins
    pub strict: bool,
}

/// JSON output options
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub pretty: bool,
    /// Offset used when rendering `addAt` / `updateAt`
    pub utc_offset: FixedOffset,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            utc_offset: Utc.fix(),
        }
    }
}
