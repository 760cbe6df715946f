//! Flat path listing

use crate::config::ListingConfig;
use crate::tree::AcceptedPath;

use super::content::{ContentRenderer, read_content};
use super::push_path;

/// One display path per line, directories included.
pub fn render_flat_list(entries: &[AcceptedPath]) -> Vec<u8> {
    let mut out = Vec::new();
    for entry in entries {
        push_path(&mut out, &entry.path);
        out.push(b'\n');
    }
    out
}

/// Each path followed directly by its content block. Directories and
/// unreadable files get the bare path line only.
pub fn render_flat_with_content(entries: &[AcceptedPath], config: &ListingConfig) -> Vec<u8> {
    let renderer = ContentRenderer::new(config);
    let mut out = Vec::new();
    for entry in entries {
        push_path(&mut out, &entry.path);
        out.push(b'\n');
        if entry.is_dir() {
            continue;
        }
        if let Some(content) = read_content(&entry.path) {
            renderer.render_block(&mut out, &content);
        }
    }
    out
}
