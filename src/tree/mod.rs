//! Directory walking
//!
//! `Walker` turns a root directory into an ordered list of `AcceptedPath`s,
//! each tagged as a directory or a file. Rendering lives in `crate::output`.

mod entry;
mod walker;

pub use entry::{AcceptedPath, EntryKind};
pub use walker::Walker;
