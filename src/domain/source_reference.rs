use super::uploaded_file::UploadedFile;

#[derive(Debug)]
pub enum SourceReference {
    YouTubeUrl(String),
    UploadedFile(UploadedFile),
}

impl SourceReference {
    /// Short description for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::YouTubeUrl(url) => format!("youtube url {url}"),
            Self::UploadedFile(file) => format!("upload {}", file.original_name()),
        }
    }
}
