use crate::Result;
use std::path::PathBuf;

/// Destination for a serialized export document.
pub trait ExportSink {
    /// Deliver `document` under `file_name`; returns where it ended up.
    fn deliver(&self, file_name: &str, document: &str) -> Result<PathBuf>;
}

/// Writes exports into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ExportSink for FileSink {
    fn deliver(&self, file_name: &str, document: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(file_name);
        std::fs::write(&path, document)?;
        tracing::info!(path = %path.display(), bytes = document.len(), "export written");
        Ok(path)
    }
}
