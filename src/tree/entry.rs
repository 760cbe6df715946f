//! Entries accepted by the walker

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Whether an accepted entry is a directory or a file.
///
/// Captured at walk time so rendering never has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A filesystem entry that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedPath {
    /// Root joined with `relative`, used both for display and for reading
    pub path: PathBuf,
    /// Path relative to the listing root
    pub relative: PathBuf,
    pub kind: EntryKind,
}

impl AcceptedPath {
    pub fn new(path: PathBuf, relative: PathBuf, kind: EntryKind) -> Self {
        Self {
            path,
            relative,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Base name, as shown on a tree line.
    pub fn name(&self) -> &OsStr {
        self.relative.file_name().unwrap_or_default()
    }

    /// Root-relative path of the containing directory; empty for top-level entries.
    pub fn parent(&self) -> &Path {
        self.relative.parent().unwrap_or(Path::new(""))
    }
}
