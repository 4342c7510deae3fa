//! Shared types, error model, and config-set loading for gasket-docs.
//!
//! This crate is the foundation depended on by all other gasket-docs crates.
//! It provides:
//! - [`DocsError`], the unified error type
//! - Domain types ([`DocsConfigSet`], [`AppEntry`], [`DocsEntry`], [`CATEGORIES`])
//! - Config-set loading ([`load_config_set`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::load_config_set;
pub use error::{DocsError, Result};
pub use types::{AppEntry, CATEGORIES, Category, CategoryDescriptor, DocsConfigSet, DocsEntry, DocsItem};
