//! Git-tracked file lookup

use std::collections::HashSet;
use std::path::Path;

use git2::Repository;

use crate::error::{ListingError, Result};
use crate::file_utils::to_slash;

/// Set of files checked into version control, as `/`-separated paths
/// relative to the listing root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedFiles {
    paths: HashSet<String>,
}

impl TrackedFiles {
    /// Collect the files in the git index that live under `root`.
    ///
    /// The repository is discovered from `root` upwards, so `root` may be a
    /// subdirectory of the work tree. This yields the same set `git ls-files`
    /// prints when run inside `root`.
    pub fn from_git(root: &Path) -> Result<Self> {
        let repo = Repository::discover(root)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| ListingError::BareRepository {
                path: root.to_path_buf(),
            })?
            .canonicalize()
            .map_err(|e| ListingError::io(root, e))?;
        let root = root.canonicalize().map_err(|e| ListingError::io(root, e))?;

        // Index paths are relative to the work tree; re-base them onto root.
        let prefix = match root.strip_prefix(&workdir) {
            Ok(rel) => to_slash(rel),
            Err(_) => String::new(),
        };
        let prefix = if prefix.is_empty() {
            prefix
        } else {
            format!("{}/", prefix)
        };

        let index = repo.index()?;
        let paths: HashSet<String> = index
            .iter()
            .filter_map(|entry| {
                let path = String::from_utf8_lossy(&entry.path);
                path.strip_prefix(prefix.as_str()).map(String::from)
            })
            .collect();

        log::debug!(
            "found {} tracked files under {}",
            paths.len(),
            root.display()
        );
        Ok(Self { paths })
    }

    /// Check a root-relative, `/`-separated path.
    pub fn contains(&self, relative: &str) -> bool {
        self.paths.contains(relative)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TrackedFiles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;

    #[test]
    fn test_tracked_file() {
        let repo = TestRepo::with_git();
        repo.add_file("tracked.rs", "fn main() {}");

        let tracked = TrackedFiles::from_git(repo.path()).unwrap();
        assert!(tracked.contains("tracked.rs"));
        assert_eq!(tracked.len(), 1);
    }

    #[test]
    fn test_untracked_file() {
        let repo = TestRepo::with_git();
        repo.add_file("tracked.rs", "fn main() {}");
        repo.add_untracked("untracked.rs", "fn other() {}");

        let tracked = TrackedFiles::from_git(repo.path()).unwrap();
        assert!(tracked.contains("tracked.rs"));
        assert!(!tracked.contains("untracked.rs"));
    }

    #[test]
    fn test_nested_paths_use_slashes() {
        let repo = TestRepo::with_git();
        repo.add_file("src/listing/print.rs", "");

        let tracked = TrackedFiles::from_git(repo.path()).unwrap();
        assert!(tracked.contains("src/listing/print.rs"));
    }

    #[test]
    fn test_subdirectory_root_is_rebased() {
        let repo = TestRepo::with_git();
        repo.add_file("top.rs", "");
        repo.add_file("sub/inner.rs", "");
        repo.add_file("sub/deeper/leaf.rs", "");

        let tracked = TrackedFiles::from_git(&repo.path().join("sub")).unwrap();
        assert!(tracked.contains("inner.rs"));
        assert!(tracked.contains("deeper/leaf.rs"));
        assert!(!tracked.contains("top.rs"));
        assert!(!tracked.contains("sub/inner.rs"));
        assert_eq!(tracked.len(), 2);
    }

    #[test]
    fn test_bare_repository_is_rejected() {
        let repo = TestRepo::new();
        Repository::init_bare(repo.path()).unwrap();

        let result = TrackedFiles::from_git(repo.path());
        match result {
            Err(ListingError::BareRepository { path }) => assert_eq!(path, repo.path()),
            other => panic!("expected BareRepository, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_root_fails() {
        let result = TrackedFiles::from_git(Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_iterator() {
        let tracked: TrackedFiles = ["a.txt", "dir/b.txt"].into_iter().collect();
        assert!(tracked.contains("a.txt"));
        assert!(tracked.contains("dir/b.txt"));
        assert!(!tracked.contains("dir"));
        assert!(!tracked.is_empty());
    }
}
