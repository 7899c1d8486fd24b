//! Bookmarks - Main Entry Point
//!
//! Reads a Netscape bookmark export and prints it as a JSON tree on stdout.
//! Logs go to stderr.

mod args;

use std::fs;

use anyhow::{Context, Result};
use bookmarks_tree::{to_json, BookmarkNode, BuildError, Error};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.config();
    let path = args.input.display().to_string();

    tracing::info!("Reading bookmarks from {}", path);
    let html = fs::read(&args.input).with_context(|| format!("failed to read {path}"))?;

    let tree = match bookmarks_tree::parse_tree(&html, &path, &config) {
        Ok(built) => {
            tracing::info!(
                "Built tree with {} nodes ({} folders, {} unreachable)",
                built.root.len(),
                built.report.placed.len(),
                built.report.unreachable.len()
            );
            built.root
        }
        // Lenient mode still prints something for a document without a root
        Err(Error::Build(BuildError::RootNotFound)) if !config.build.strict => {
            tracing::error!("Root folder not found");
            BookmarkNode::default()
        }
        Err(err) => return Err(err).with_context(|| format!("failed to convert {path}")),
    };

    let json = to_json(&tree, &config.output).context("failed to serialize bookmark tree")?;
    println!("{json}");

    Ok(())
}
