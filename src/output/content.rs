//! File content rendering
//!
//! Content is rendered three ways:
//! - `render_inline`: indented under a tree line, one output line per `\n`-split line
//! - `render_block`: unindented, for flat listings and the separate section
//! - `render_separate_section`: every file after the listing, each with a header
//!
//! Content is copied byte for byte; files in legacy encodings come out exactly
//! as they are on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ListingConfig;

use super::{push_indent, push_path};

pub const CONTENT_START: &str = "----- CONTENT START -----";
pub const CONTENT_END: &str = "----- CONTENT END -----";

/// Read a whole file as raw bytes.
pub fn read_content(path: &Path) -> Option<Vec<u8>> {
    fs::read(path).ok()
}

/// Number of `\n`-separated segments, counting the empty one after a trailing newline.
pub fn line_count(content: &[u8]) -> usize {
    split_lines(content).count()
}

fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split(|&b| b == b'\n')
}

fn push_numbered(out: &mut Vec<u8>, number: usize, line: &[u8]) {
    out.extend_from_slice(format!("{:>4}: ", number).as_bytes());
    out.extend_from_slice(line);
    out.push(b'\n');
}

fn push_marker(out: &mut Vec<u8>, marker: &str) {
    out.extend_from_slice(marker.as_bytes());
    out.push(b'\n');
}

/// Renders file contents according to the line-number and marker settings.
pub struct ContentRenderer<'a> {
    config: &'a ListingConfig,
}

impl<'a> ContentRenderer<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self { config }
    }

    /// Render a file beneath its tree line, every line prefixed by `level` indents.
    ///
    /// An unreadable file renders nothing.
    pub fn render_inline(&self, out: &mut Vec<u8>, path: &Path, level: usize) {
        let Some(content) = read_content(path) else {
            log::trace!("no content for unreadable {}", path.display());
            return;
        };

        if self.config.show_header_footers {
            push_indent(out, level);
            push_marker(out, CONTENT_START);
        }
        for (i, line) in split_lines(&content).enumerate() {
            push_indent(out, level);
            if self.config.show_line_numbers {
                push_numbered(out, i + 1, line);
            } else {
                out.extend_from_slice(line);
                out.push(b'\n');
            }
        }
        if self.config.show_header_footers {
            push_indent(out, level);
            push_marker(out, CONTENT_END);
        }
    }

    /// Render already-read content without indentation.
    ///
    /// Without line numbers the content is copied as is, plus a newline if
    /// it does not end with one.
    pub fn render_block(&self, out: &mut Vec<u8>, content: &[u8]) {
        if self.config.show_header_footers {
            push_marker(out, CONTENT_START);
        }
        if self.config.show_line_numbers {
            for (i, line) in split_lines(content).enumerate() {
                push_numbered(out, i + 1, line);
            }
        } else {
            out.extend_from_slice(content);
            if !content.ends_with(b"\n") {
                out.push(b'\n');
            }
        }
        if self.config.show_header_footers {
            push_marker(out, CONTENT_END);
        }
    }

    /// Render the content of every file in `paths`, in order, each as
    /// `"<path> (<N> lines):"` followed by its block and a blank line.
    ///
    /// Directories and unreadable files are skipped.
    pub fn render_separate_section(&self, paths: &[PathBuf]) -> Vec<u8> {
        let mut out = Vec::new();
        for path in paths {
            if path.is_dir() {
                continue;
            }
            let Some(content) = read_content(path) else {
                log::trace!("no content for unreadable {}", path.display());
                continue;
            };
            push_path(&mut out, path);
            out.extend_from_slice(format!(" ({} lines):\n", line_count(&content)).as_bytes());
            self.render_block(&mut out, &content);
            out.push(b'\n');
        }
        out
    }
}
