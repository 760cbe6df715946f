//! Walker - collects the accepted entries under a root

use std::path::Path;

use ignore::{DirEntry, WalkBuilder};

use crate::config::ListingConfig;
use crate::error::Result;
use crate::file_utils::{
    display_path, is_binary, is_hidden, matches_include, should_exclude, to_slash,
};
use crate::git::TrackedFiles;

use super::entry::{AcceptedPath, EntryKind};

/// Depth-first walker producing entries in pre-order, siblings sorted by name.
///
/// Hidden and excluded entries are dropped, and directories among them are
/// pruned whole. Every other directory is kept and descended into. Files must
/// additionally be tracked (when a tracked set is given), match the include
/// patterns, and not look binary.
pub struct Walker<'a> {
    config: &'a ListingConfig,
    tracked: Option<&'a TrackedFiles>,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self {
            config,
            tracked: None,
        }
    }

    /// Only accept files present in `tracked`.
    pub fn with_tracked_files(mut self, tracked: &'a TrackedFiles) -> Self {
        self.tracked = Some(tracked);
        self
    }

    /// Walk the root. The first traversal error aborts the walk.
    pub fn walk(&self) -> Result<Vec<AcceptedPath>> {
        let root = &self.config.root;
        let mut accepted = Vec::new();

        for result in self.build_walk() {
            let entry = result?;
            if entry.depth() == 0 {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative.to_path_buf();
            let path = display_path(root, &relative);

            // Symlinks are not followed, so a link to a directory lands here
            // as a non-directory and is then rejected by the binary check.
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                accepted.push(AcceptedPath::new(path, relative, EntryKind::Directory));
            } else if self.accepts_file(&entry, &relative) {
                accepted.push(AcceptedPath::new(path, relative, EntryKind::File));
            }
        }

        log::debug!(
            "walked {}: {} entries accepted ({} files)",
            root.display(),
            accepted.len(),
            accepted.iter().filter(|e| e.is_file()).count()
        );
        Ok(accepted)
    }

    fn build_walk(&self) -> ignore::Walk {
        let root = self.config.root.clone();
        let exclude = self.config.exclude.clone();

        let mut builder = WalkBuilder::new(&self.config.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| keep_entry(entry, &root, &exclude));
        builder.build()
    }

    fn accepts_file(&self, entry: &DirEntry, relative: &Path) -> bool {
        if let Some(tracked) = self.tracked {
            if !tracked.contains(&to_slash(relative)) {
                log::trace!("skipping untracked {}", relative.display());
                return false;
            }
        }

        let name = entry.file_name().to_string_lossy();
        if !matches_include(&name, &self.config.include) {
            return false;
        }

        if is_binary(entry.path()) {
            log::trace!("skipping binary {}", relative.display());
            return false;
        }

        true
    }
}

/// Hidden/exclude check applied before descending; rejecting a directory prunes it.
fn keep_entry(entry: &DirEntry, root: &Path, exclude: &[String]) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if is_hidden(entry.path(), root) {
        log::trace!("pruning hidden {}", entry.path().display());
        return false;
    }
    if should_exclude(&entry.file_name().to_string_lossy(), exclude) {
        log::trace!("pruning excluded {}", entry.path().display());
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;
    use std::path::PathBuf;

    fn relatives(entries: &[AcceptedPath]) -> Vec<String> {
        entries.iter().map(|e| to_slash(&e.relative)).collect()
    }

    fn config_for(repo: &TestRepo) -> ListingConfig {
        ListingConfig {
            root: repo.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_preorder_sorted_by_name() {
        let repo = TestRepo::new();
        repo.add_untracked("b.txt", "b");
        repo.add_untracked("a/z.txt", "z");
        repo.add_untracked("a/m.txt", "m");
        repo.add_untracked("c.txt", "c");

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(
            relatives(&entries),
            vec!["a", "a/m.txt", "a/z.txt", "b.txt", "c.txt"]
        );
        assert!(entries[0].is_dir());
        assert!(entries[1].is_file());
    }

    #[test]
    fn test_root_is_not_emitted() {
        let repo = TestRepo::new();
        repo.add_untracked("only.txt", "x");

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["only.txt"]);
    }

    #[test]
    fn test_hidden_entries_pruned() {
        let repo = TestRepo::new();
        repo.add_untracked(".gitignore", "ignore");
        repo.add_untracked(".cache/deep/file.txt", "x");
        repo.add_untracked("src/.env", "SECRET=1");
        repo.add_untracked("src/main.rs", "fn main() {}");

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["src", "src/main.rs"]);
    }

    #[test]
    fn test_excluded_directories_pruned() {
        let repo = TestRepo::new();
        repo.add_untracked("node_modules/pkg/index.js", "x");
        repo.add_untracked("main.env", "KEY=1");
        repo.add_untracked("main.go", "package main");

        let config = ListingConfig {
            exclude: vec![".git".into(), "node_modules".into(), "*.env".into()],
            ..config_for(&repo)
        };
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["main.go"]);
    }

    #[test]
    fn test_include_filters_files_but_not_directories() {
        let repo = TestRepo::new();
        repo.add_untracked("docs/guide.md", "# guide");
        repo.add_untracked("docs/notes.txt", "notes");
        repo.add_untracked("src/lib.rs", "");
        repo.add_untracked("README.md", "# readme");

        let config = ListingConfig {
            include: vec!["*.md".into()],
            ..config_for(&repo)
        };
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(
            relatives(&entries),
            vec!["README.md", "docs", "docs/guide.md", "src"],
            "directories stay even when no file inside matches"
        );
    }

    #[test]
    fn test_include_pattern_matching_directory_name_does_not_matter() {
        let repo = TestRepo::new();
        repo.add_untracked("tests/unit.rs", "");

        let config = ListingConfig {
            include: vec!["*.rs".into()],
            ..config_for(&repo)
        };
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["tests", "tests/unit.rs"]);
    }

    #[test]
    fn test_binary_files_skipped() {
        let repo = TestRepo::new();
        repo.add_untracked("hello.txt", "hello world");
        repo.add_bytes("binary.bin", &[0x00, 0x01, 0x02]);

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["hello.txt"]);
    }

    #[test]
    fn test_empty_directory_is_kept() {
        let repo = TestRepo::new();
        repo.add_dir("empty");
        repo.add_untracked("file.txt", "x");

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["empty", "file.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
    }

    #[test]
    fn test_tracked_filter() {
        let repo = TestRepo::new();
        repo.add_untracked("tracked.rs", "");
        repo.add_untracked("untracked.rs", "");
        repo.add_untracked("src/kept.rs", "");
        repo.add_untracked("src/dropped.rs", "");

        let tracked: TrackedFiles = ["tracked.rs", "src/kept.rs"].into_iter().collect();
        let config = config_for(&repo);
        let entries = Walker::new(&config)
            .with_tracked_files(&tracked)
            .walk()
            .unwrap();
        assert_eq!(
            relatives(&entries),
            vec!["src", "src/kept.rs", "tracked.rs"]
        );
    }

    #[test]
    fn test_display_paths_join_root() {
        let repo = TestRepo::new();
        repo.add_untracked("sub/file.txt", "x");

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(entries[1].path, repo.path().join("sub").join("file.txt"));
        assert_eq!(entries[1].relative, PathBuf::from("sub").join("file.txt"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let config = ListingConfig {
            root: PathBuf::from("/nonexistent/root/for/walker"),
            ..Default::default()
        };
        assert!(Walker::new(&config).walk().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        use std::os::unix::fs::symlink;

        let repo = TestRepo::new();
        repo.add_untracked("real/file.txt", "x");
        symlink(repo.path().join("real"), repo.path().join("link")).unwrap();
        symlink(repo.path().join("missing.txt"), repo.path().join("dangling.txt")).unwrap();

        let config = config_for(&repo);
        let entries = Walker::new(&config).walk().unwrap();
        assert_eq!(relatives(&entries), vec!["real", "real/file.txt"]);
    }
}
