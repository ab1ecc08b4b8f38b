use std::io;
use std::path::{Path, PathBuf};

use crate::domain::UploadedFile;

const UPLOAD_PREFIX: &str = "upload-";

/// Writes uploads into a transient directory as self-deleting temp files.
#[derive(Debug, Clone)]
pub struct UploadStaging {
    dir: PathBuf,
}

impl UploadStaging {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn stage(&self, original_name: &str, data: &[u8]) -> io::Result<UploadedFile> {
        let path = tempfile::Builder::new()
            .prefix(UPLOAD_PREFIX)
            .tempfile_in(&self.dir)?
            .into_temp_path();

        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), "Upload staged");

        Ok(UploadedFile::new(original_name, path, data.len() as u64))
    }

    /// Removes uploads left behind by a previous process, returning how many were deleted.
    pub fn purge_leftovers(&self) -> io::Result<usize> {
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let is_upload = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(UPLOAD_PREFIX));
            if is_upload && entry.file_type()?.is_file() {
                std::fs::remove_file(entry.path())?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
