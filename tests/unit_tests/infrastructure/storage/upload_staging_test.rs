use recap::infrastructure::storage::UploadStaging;

use crate::common::{create_staging, stage, staged_file_count};

#[tokio::test]
async fn given_upload_when_staging_then_writes_bytes_and_records_metadata() {
    let (_dir, staging) = create_staging();

    let (upload, path) = stage(&staging, "Lecture Notes.TXT", b"hello").await;

    assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    assert_eq!(upload.original_name(), "Lecture Notes.TXT");
    assert_eq!(upload.declared_extension(), Some(".txt"));
    assert_eq!(upload.size_bytes(), 5);
    assert!(path.starts_with(staging.dir()));
}

#[tokio::test]
async fn given_staged_upload_when_discarding_then_file_is_removed() {
    let (_dir, staging) = create_staging();
    let (upload, path) = stage(&staging, "notes.txt", b"hello").await;

    upload.discard().unwrap();

    assert!(!path.exists());
    assert_eq!(staged_file_count(&staging), 0);
}

#[tokio::test]
async fn given_staged_upload_when_dropped_then_file_is_removed() {
    let (_dir, staging) = create_staging();
    let (upload, path) = stage(&staging, "notes.txt", b"hello").await;

    drop(upload);

    assert!(!path.exists());
}

#[tokio::test]
async fn given_same_name_twice_when_staging_then_paths_do_not_collide() {
    let (_dir, staging) = create_staging();

    let (_first, first_path) = stage(&staging, "notes.txt", b"one").await;
    let (_second, second_path) = stage(&staging, "notes.txt", b"two").await;

    assert_ne!(first_path, second_path);
    assert_eq!(staged_file_count(&staging), 2);
}

#[test]
fn given_leftover_uploads_when_purging_then_removes_only_uploads() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("upload-stale1"), b"x").unwrap();
    std::fs::write(dir.path().join("upload-stale2"), b"x").unwrap();
    std::fs::write(dir.path().join("keep.me"), b"x").unwrap();
    let staging = UploadStaging::new(dir.path()).unwrap();

    let removed = staging.purge_leftovers().unwrap();

    assert_eq!(removed, 2);
    assert!(dir.path().join("keep.me").exists());
}
