//! Configuration for a listing run

use std::path::PathBuf;

/// Everything a listing run needs to know, as produced by the command line.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub root: PathBuf,
    /// Base-name globs a file must match to be listed. Empty matches all.
    pub include: Vec<String>,
    /// Base-name globs (or literal names) that prune files and directories.
    pub exclude: Vec<String>,
    pub git_tracked_only: bool,
    /// Tree output when true, flat path list otherwise
    pub show_tree: bool,
    pub show_content: bool,
    /// Print the listing first and all file contents after it
    pub separate_content: bool,
    pub show_line_numbers: bool,
    /// Wrap content in CONTENT START / CONTENT END markers
    pub show_header_footers: bool,
    pub output: Option<PathBuf>,
}

impl ListingConfig {
    /// Content goes directly beneath each listed file.
    pub fn inline_content(&self) -> bool {
        self.show_content && !self.separate_content
    }

    /// Content goes into its own section after the listing.
    pub fn separate_section(&self) -> bool {
        self.show_content && self.separate_content
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include: Vec::new(),
            exclude: Vec::new(),
            git_tracked_only: false,
            show_tree: true,
            show_content: false,
            separate_content: false,
            show_line_numbers: false,
            show_header_footers: true,
            output: None,
        }
    }
}

/// Split a comma-separated pattern list, trimming each element.
///
/// An empty string yields no patterns. Otherwise empty elements are kept: an
/// empty include pattern matches no name, so `-i " , "` lists no files.
pub fn split_patterns(patterns: &str) -> Vec<String> {
    if patterns.is_empty() {
        return Vec::new();
    }
    patterns
        .split(',')
        .map(|p| p.trim().to_string())
        .collect()
}
