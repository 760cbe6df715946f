//! Listing runs: walk, render, write
//!
//! `run` produces the whole output as one byte buffer before anything is
//! written, so a failed run never leaves partial output behind. File names and
//! content are copied as raw bytes; nothing is re-encoded.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ListingConfig;
use crate::error::{ListingError, Result};
use crate::git::TrackedFiles;
use crate::output::{ContentRenderer, TreeBuilder, render_flat_list, render_flat_with_content};
use crate::tree::{AcceptedPath, Walker};

/// Walk `config.root` and render it, looking tracked files up in git when
/// `git_tracked_only` is set.
pub fn run(config: &ListingConfig) -> Result<Vec<u8>> {
    run_with_tracked(config, TrackedFiles::from_git)
}

/// Like [`run`], with the tracked-file lookup supplied by the caller.
///
/// `lookup` is only invoked when `git_tracked_only` is set; its error aborts
/// the run.
pub fn run_with_tracked<F>(config: &ListingConfig, lookup: F) -> Result<Vec<u8>>
where
    F: FnOnce(&Path) -> Result<TrackedFiles>,
{
    let tracked = if config.git_tracked_only {
        Some(lookup(&config.root)?)
    } else {
        None
    };

    let mut walker = Walker::new(config);
    if let Some(ref tracked) = tracked {
        walker = walker.with_tracked_files(tracked);
    }
    let entries = walker.walk()?;

    Ok(if config.show_tree {
        render_tree(config, &entries)
    } else {
        render_flat(config, &entries)
    })
}

fn render_tree(config: &ListingConfig, entries: &[AcceptedPath]) -> Vec<u8> {
    log::debug!("rendering tree (content: {})", content_mode(config));
    let tree = TreeBuilder::new(config).build(entries);
    let mut out = tree.text;
    if config.separate_section() && !tree.file_order.is_empty() {
        out.push(b'\n');
        out.extend(ContentRenderer::new(config).render_separate_section(&tree.file_order));
    }
    out
}

fn render_flat(config: &ListingConfig, entries: &[AcceptedPath]) -> Vec<u8> {
    log::debug!("rendering flat list (content: {})", content_mode(config));
    if config.inline_content() {
        return render_flat_with_content(entries, config);
    }

    let mut out = render_flat_list(entries);
    let files: Vec<_> = entries
        .iter()
        .filter(|e| e.is_file())
        .map(|e| e.path.clone())
        .collect();
    if config.separate_section() && !files.is_empty() {
        out.push(b'\n');
        out.extend(ContentRenderer::new(config).render_separate_section(&files));
    }
    out
}

fn content_mode(config: &ListingConfig) -> &'static str {
    if config.inline_content() {
        "inline"
    } else if config.separate_section() {
        "separate"
    } else {
        "none"
    }
}

/// Write the listing to `output`, creating or truncating it, or to stdout.
pub fn write_output(listing: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, listing).map_err(|e| ListingError::io(path, e))?;
            log::info!("Output written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(listing)
                .and_then(|()| stdout.flush())
                .map_err(|e| ListingError::io("<stdout>", e))?;
        }
    }
    Ok(())
}
