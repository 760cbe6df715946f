//! file-mapper - map a project tree and its file contents into one text listing

pub mod config;
pub mod error;
pub mod file_utils;
pub mod git;
pub mod listing;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ListingConfig, split_patterns};
pub use error::{ListingError, Result};
pub use git::TrackedFiles;
pub use listing::{run, run_with_tracked, write_output};
pub use output::{TreeBuilder, TreeOutput};
pub use tree::{AcceptedPath, EntryKind, Walker};
