//! Persists the generated index to `<docs_root>/README.md`.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use gasket_docs_shared::{DocsConfigSet, DocsError, Result};

use crate::content::generate_content;

/// File name of the generated index inside the docs root.
pub const INDEX_FILE_NAME: &str = "README.md";

/// Destination for the rendered index.
pub trait IndexSink {
    /// Replace whatever is at `path` with `contents` in one write.
    fn write(&self, path: &Path, contents: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Writes straight to the filesystem, overwriting existing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl IndexSink for FsSink {
    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| DocsError::io(path, e))
    }
}

/// Generate the index for `config` and write it under its docs root.
///
/// Returns the path that was written.
pub async fn generate_index(config: &DocsConfigSet) -> Result<PathBuf> {
    generate_index_with(config, &FsSink).await
}

/// Like [`generate_index`], writing through a caller-supplied sink.
#[instrument(skip_all, fields(docs_root = %config.docs_root.display()))]
pub async fn generate_index_with<S: IndexSink>(config: &DocsConfigSet, sink: &S) -> Result<PathBuf> {
    let path = config.docs_root.join(INDEX_FILE_NAME);
    let content = generate_content(config);

    sink.write(&path, &content).await?;

    info!(path = %path.display(), bytes = content.len(), "wrote docs index");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use gasket_docs_shared::{AppEntry, DocsEntry};

    #[derive(Default)]
    struct RecordingSink {
        writes: Mutex<Vec<(PathBuf, String)>>,
    }

    impl IndexSink for RecordingSink {
        async fn write(&self, path: &Path, contents: &str) -> Result<()> {
            self.writes
                .lock()
                .expect("sink lock")
                .push((path.to_path_buf(), contents.to_string()));
            Ok(())
        }
    }

    fn make_config(docs_root: &Path) -> DocsConfigSet {
        let app = AppEntry {
            name: "test-app".into(),
            description: Some("Some test app".into()),
            link: Some("README.md#overview".into()),
            target_root: docs_root.join("test-app"),
        };
        let mut config = DocsConfigSet::new(app, "/path/to/app", docs_root);
        config.plugins.push(DocsEntry {
            link: Some("README.md".into()),
            ..DocsEntry::new("example-plugin", docs_root.join("test-app/plugins/example-plugin"))
        });
        config
    }

    #[tokio::test]
    async fn single_write_to_docs_root_readme() {
        let config = make_config(Path::new("/path/to/app/.docs"));
        let sink = RecordingSink::default();

        let written = generate_index_with(&config, &sink).await.unwrap();

        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, PathBuf::from("/path/to/app/.docs/README.md"));
        assert_eq!(writes[0].0, written);
        assert_eq!(writes[0].1, generate_content(&config));
    }

    #[tokio::test]
    async fn writes_file_to_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_config(tmp.path());

        let path = generate_index(&config).await.unwrap();

        assert_eq!(path, tmp.path().join("README.md"));
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, generate_content(&config));
        assert!(on_disk.contains("[example-plugin]: test-app/plugins/example-plugin/README.md"));
    }

    #[tokio::test]
    async fn overwrites_existing_index() {
        let tmp = tempfile::tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        std::fs::write(&readme, "stale hand-written content that is much longer than needed")
            .unwrap();

        let config = make_config(tmp.path());
        generate_index(&config).await.unwrap();

        let on_disk = std::fs::read_to_string(&readme).unwrap();
        assert!(!on_disk.contains("stale"));
        assert_eq!(on_disk, generate_content(&config));
    }

    #[tokio::test]
    async fn missing_docs_root_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_config(&tmp.path().join("does-not-exist"));

        let err = generate_index(&config).await.unwrap_err();
        match err {
            DocsError::Io { path, source } => {
                assert_eq!(path, tmp.path().join("does-not-exist/README.md"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
