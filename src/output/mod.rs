//! Listing output
//!
//! - `tree` - connector tree with optional inline content
//! - `flat` - flat path list with optional inline content
//! - `content` - per-file content blocks and the separate content section

use std::path::Path;

mod content;
mod flat;
mod tree;

pub use content::{CONTENT_END, CONTENT_START, ContentRenderer, line_count, read_content};
pub use flat::{render_flat_list, render_flat_with_content};
pub use tree::{TreeBuilder, TreeOutput};

const INDENT: &str = "│   ";

/// Append `level` tree indents.
fn push_indent(out: &mut Vec<u8>, level: usize) {
    for _ in 0..level {
        out.extend_from_slice(INDENT.as_bytes());
    }
}

/// Append a path as the bytes the OS gave us, so non-UTF-8 names survive.
fn push_path(out: &mut Vec<u8>, path: impl AsRef<Path>) {
    out.extend_from_slice(path.as_ref().as_os_str().as_encoded_bytes());
}
