//! Integration tests for scratch clearing

mod helpers;

use corpus_mgr::ops;
use corpus_mgr::ManagerError;
use std::fs;

#[test]
fn test_temp_subtrees_are_removed() {
    let root = tempfile::tempdir().unwrap();
    let dir = helpers::make_full_recording(root.path(), "a-talk");
    fs::create_dir_all(dir.join("temp/chunks")).unwrap();
    fs::write(dir.join("temp/chunks/000.wav"), b"scratch").unwrap();
    fs::write(dir.join("temp/work.log"), b"scratch").unwrap();

    let report = ops::clear_temp(root.path()).unwrap();

    assert_eq!(report.processed, 1);
    assert!(!dir.join("temp").exists());
    // The rest of the skeleton is untouched
    assert!(dir.join("raw").is_dir());
    assert!(dir.join("transcript/textgrid").is_dir());
}

#[test]
fn test_recordings_without_temp_are_not_selected() {
    let root = tempfile::tempdir().unwrap();
    helpers::make_tracked_recording(root.path(), "no-temp");
    let with_temp = helpers::make_full_recording(root.path(), "with-temp");

    let report = ops::clear_temp(root.path()).unwrap();

    assert_eq!(report.processed, 1);
    assert!(!with_temp.join("temp").exists());
}

#[test]
fn test_clear_is_idempotent() {
    let root = tempfile::tempdir().unwrap();
    helpers::make_full_recording(root.path(), "a-talk");

    let first = ops::clear_temp(root.path()).unwrap();
    assert_eq!(first.processed, 1);

    // temp/ is gone, so the directory drops out of the scan entirely
    let second = ops::clear_temp(root.path()).unwrap();
    assert_eq!(second.processed, 0);
}

#[test]
fn test_clear_missing_root_errors() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("gone");

    let result = ops::clear_temp(&missing);
    assert!(matches!(result, Err(ManagerError::PathNotFound(_))));
}
