//! Tree rendering
//!
//! `TreeBuilder` groups the walker's flat entry list by parent directory and
//! renders it with box-drawing connectors:
//!
//! ```text
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! Nested lines are indented with `"│   "` once per level, including under a
//! last sibling.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::ListingConfig;
use crate::tree::{AcceptedPath, EntryKind};

use super::content::ContentRenderer;
use super::{push_indent, push_path};

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";

/// Rendered tree plus the files in the order they were drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeOutput {
    /// Rendered bytes; names and content are not re-encoded
    pub text: Vec<u8>,
    /// Display paths of the rendered files, top to bottom
    pub file_order: Vec<PathBuf>,
}

/// Builds the connector tree, optionally with content inlined under each file.
pub struct TreeBuilder<'a> {
    config: &'a ListingConfig,
    content: ContentRenderer<'a>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self {
            config,
            content: ContentRenderer::new(config),
        }
    }

    pub fn build(&self, entries: &[AcceptedPath]) -> TreeOutput {
        let groups = group_by_parent(entries);
        let mut output = TreeOutput::default();
        self.render_dir(&groups, Path::new(""), 0, &mut output);
        output
    }

    fn render_dir(
        &self,
        groups: &HashMap<&Path, Vec<&AcceptedPath>>,
        dir: &Path,
        level: usize,
        output: &mut TreeOutput,
    ) {
        let Some(children) = groups.get(dir) else {
            return;
        };

        for (i, child) in children.iter().enumerate() {
            let connector = if i == children.len() - 1 {
                LAST_BRANCH
            } else {
                BRANCH
            };
            push_indent(&mut output.text, level);
            output.text.extend_from_slice(connector.as_bytes());
            output.text.push(b' ');
            push_path(&mut output.text, child.name());
            output.text.push(b'\n');

            match child.kind {
                EntryKind::Directory => {
                    self.render_dir(groups, &child.relative, level + 1, output);
                }
                EntryKind::File => {
                    output.file_order.push(child.path.clone());
                    if self.config.inline_content() {
                        self.content
                            .render_inline(&mut output.text, &child.path, level + 1);
                    }
                }
            }
        }
    }
}

/// Map each directory (root-relative, `""` for the root) to its children sorted
/// by name.
///
/// Every accepted directory gets a key, even when nothing inside it survived.
fn group_by_parent(entries: &[AcceptedPath]) -> HashMap<&Path, Vec<&AcceptedPath>> {
    let mut groups: HashMap<&Path, Vec<&AcceptedPath>> = HashMap::new();
    for entry in entries {
        groups.entry(entry.parent()).or_default().push(entry);
        if entry.is_dir() {
            groups.entry(entry.relative.as_path()).or_default();
        }
    }
    for children in groups.values_mut() {
        children.sort_by(|a, b| a.relative.cmp(&b.relative));
    }
    groups
}
