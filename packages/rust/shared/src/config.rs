//! Loading a [`DocsConfigSet`] from disk or from memory.
//!
//! The set itself is built upstream by plugin discovery; this module only
//! reads a serialized copy. Files ending in `.toml` are parsed as TOML,
//! everything else as JSON.

use std::path::Path;

use crate::error::{DocsError, Result};
use crate::types::DocsConfigSet;

impl DocsConfigSet {
    /// Parse a config set from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| DocsError::structure(format!("invalid config set: {e}")))
    }

    /// Parse a config set from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DocsError::structure(format!("invalid config set: {e}")))
    }
}

/// Load a config set from a specific file path.
pub fn load_config_set(path: &Path) -> Result<DocsConfigSet> {
    let content = std::fs::read_to_string(path).map_err(|e| DocsError::io(path, e))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    tracing::debug!(?path, is_toml, "loading config set");

    let parsed = if is_toml {
        DocsConfigSet::from_toml_str(&content)
    } else {
        DocsConfigSet::from_json_str(&content)
    };

    parsed.map_err(|e| match e {
        DocsError::Structure { message } => {
            DocsError::structure(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}
