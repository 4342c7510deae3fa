//! GitHub-flavored Markdown building blocks for generated docs.
//!
//! Provides the pieces the index generator stitches together: pipe tables
//! with escaped cells, and reference-style link definitions whose targets
//! are relativized against the output directory.

mod links;
mod table;

pub use links::{RefLink, escape_label, is_external, normalize_path, relative_path, resolve_link};
pub use table::{Table, escape_cell};

/// Wrap a link label in brackets for inline reference use (`[label]`).
///
/// Uses the same escaping as [`RefLink`]'s definition line so both sides
/// of the reference match.
pub fn ref_label(label: &str) -> String {
    format!("[{}]", escape_label(label))
}
