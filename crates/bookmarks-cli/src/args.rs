//! Command line arguments

use std::path::PathBuf;

use bookmarks_tree::Config;
use chrono::FixedOffset;
use clap::{ArgAction, Parser};

/// Convert a Netscape bookmark export into a JSON tree
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// bookmark file exported by a browser
    #[arg(default_value = "bookmarks.html")]
    pub input: PathBuf,
    /// indent the JSON output
    #[arg(short, long)]
    pub pretty: bool,
    /// fail on duplicate folder titles or more than one top-level folder
    #[arg(long)]
    pub strict: bool,
    /// treat the document's <H1> heading as the root folder
    #[arg(long)]
    pub root_heading: bool,
    /// render timestamps with this offset, e.g. +08:00 (default UTC)
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    pub utc_offset: Option<FixedOffset>,
    /// more logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if self.pretty {
            config = config.pretty();
        }
        if self.strict {
            config = config.strict();
        }
        if self.root_heading {
            config = config.with_root_heading();
        }
        if let Some(offset) = self.utc_offset {
            config = config.with_utc_offset(offset);
        }
        config
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["bookmarks"]);
        assert_eq!(args.input, PathBuf::from("bookmarks.html"));
        assert_eq!(args.log_level(), "warn");

        let config = args.config();
        assert!(!config.build.strict);
        assert!(!config.output.pretty);
        assert_eq!(config.extract.folder_tags, ["h3"]);
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "bookmarks",
            "export.html",
            "--pretty",
            "--strict",
            "--root-heading",
            "--utc-offset",
            "+08:00",
            "-vv",
        ]);
        assert_eq!(args.log_level(), "debug");

        let config = args.config();
        assert!(config.build.strict);
        assert!(config.output.pretty);
        assert_eq!(config.extract.folder_tags, ["h1", "h3"]);
        assert_eq!(config.output.utc_offset.local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_negative_offset() {
        let args = Args::parse_from(["bookmarks", "--utc-offset", "-05:00"]);
        assert_eq!(args.utc_offset.unwrap().local_minus_utc(), -5 * 3600);
    }
}
