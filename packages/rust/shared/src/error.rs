//! Error types for gasket-docs.
//!
//! Library crates use [`DocsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all index generation operations.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// The config set is missing a required field or is otherwise malformed.
    #[error("structural error: {message}")]
    Structure { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocsError>;

impl DocsError {
    /// Create a structural error from any displayable message.
    pub fn structure(msg: impl Into<String>) -> Self {
        Self::Structure {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = DocsError::structure("missing field `docsRoot`");
        assert_eq!(err.to_string(), "structural error: missing field `docsRoot`");

        let err = DocsError::io(
            "/nope/README.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/nope/README.md"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn io_error_keeps_source_kind() {
        let err = DocsError::io(
            "/tmp/x",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        match err {
            DocsError::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }
}
