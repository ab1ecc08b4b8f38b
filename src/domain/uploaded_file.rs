use std::io;
use std::path::Path;

use tempfile::TempPath;

/// A client upload staged on disk for the duration of one extraction.
///
/// The backing file is removed by [`UploadedFile::discard`], or when the value
/// is dropped if `discard` was never reached.
#[derive(Debug)]
pub struct UploadedFile {
    original_name: String,
    declared_extension: Option<String>,
    size_bytes: u64,
    path: TempPath,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, path: TempPath, size_bytes: u64) -> Self {
        let original_name = original_name.into();
        let declared_extension = Path::new(&original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()));

        Self {
            original_name,
            declared_extension,
            size_bytes,
            path,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Lower-cased extension of the client file name, including the dot.
    pub fn declared_extension(&self) -> Option<&str> {
        self.declared_extension.as_deref()
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn discard(self) -> io::Result<()> {
        self.path.close()
    }
}
