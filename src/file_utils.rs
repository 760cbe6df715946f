//! Path predicates used by the walker
//!
//! Each function decides one thing about a single path: whether it is hidden,
//! binary, excluded, or included. None of them return errors; unreadable
//! files and malformed patterns fall back to the conservative answer.

use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;

/// Number of leading bytes inspected by the binary heuristic.
pub const BINARY_SNIFF_LEN: usize = 8000;

/// Check whether any segment of `path`, relative to `root`, starts with a dot.
///
/// The root itself is never hidden, even when its own name starts with a dot.
pub fn is_hidden(path: &Path, root: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    relative.components().any(|c| match c {
        Component::Normal(segment) => segment.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// Guess whether a file is binary by looking for a NUL byte in its first
/// 8000 bytes.
///
/// This is a heuristic, not a file-type detector. A file that cannot be
/// opened or read counts as binary so it stays out of content output.
pub fn is_binary(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return true;
    };
    let mut prefix = Vec::with_capacity(BINARY_SNIFF_LEN);
    match file.take(BINARY_SNIFF_LEN as u64).read_to_end(&mut prefix) {
        Ok(_) => is_binary_data(&prefix),
        Err(_) => true,
    }
}

/// Check a byte buffer for a NUL byte.
pub fn is_binary_data(bytes: &[u8]) -> bool {
    bytes.contains(&0)
}

/// Check if a base name matches any exclude pattern, by glob or verbatim.
pub fn should_exclude(name: &str, exclude_patterns: &[String]) -> bool {
    exclude_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Check if a base name matches the include patterns. No patterns includes everything.
pub fn matches_include(name: &str, include_patterns: &[String]) -> bool {
    include_patterns.is_empty() || include_patterns.iter().any(|p| glob_match(p, name))
}

/// Match a glob pattern against a name. Malformed patterns never match.
///
/// Supported syntax:
/// - `*` any run of characters (repeated stars act as one), `?` one character
/// - `[abc]`, `[a-z]` a class; `[^...]` negates it, and so does `[!...]`
/// - `\x` outside a class matches `x` literally
///
/// A trailing lone `\` is malformed. Matching is case-sensitive.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let Some(pattern) = to_glob_syntax(pattern) else {
        return false;
    };
    Pattern::new(&pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Rewrite a pattern into the dialect `glob::Pattern` parses.
fn to_glob_syntax(pattern: &str) -> Option<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next()?;
                if in_class {
                    out.push(escaped);
                } else {
                    out.push('[');
                    out.push(escaped);
                    out.push(']');
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                if chars.next_if_eq(&'^').is_some() {
                    out.push('!');
                }
                // A `]` right after the opening bracket is a member, not the end.
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '*' if !in_class => {
                while chars.next_if_eq(&'*').is_some() {}
                out.push('*');
            }
            _ => out.push(c),
        }
    }
    Some(out)
}

/// Join a relative path onto the root the way it should be displayed.
///
/// The root is cleaned lexically first: `.` components are dropped and `..`
/// cancels the component before it. A root of `.` yields the bare relative
/// path, and `./src` or `src/../src` yield `src/...`. Leading `..`s of a
/// relative root are kept; `..` at the filesystem root is dropped.
pub fn display_path(root: &Path, relative: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in root.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }
    cleaned.join(relative)
}

/// Render a relative path with `/` separators on every platform.
pub fn to_slash(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
