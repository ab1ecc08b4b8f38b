mod upload_staging;

pub use upload_staging::UploadStaging;
