//! Index generation for gasket-docs.
//!
//! Turns a [`DocsConfigSet`](gasket_docs_shared::DocsConfigSet) into the
//! top-level `README.md` of the docs output directory: [`content`] builds the
//! markdown, [`writer`] persists it.

pub mod content;
pub mod writer;

pub use content::{GENERATED_MARKER, LINKS_MARKER, generate_content};
pub use writer::{FsSink, INDEX_FILE_NAME, IndexSink, generate_index, generate_index_with};
