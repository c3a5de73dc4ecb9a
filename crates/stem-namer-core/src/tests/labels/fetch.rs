use crate::{
    DEFAULT_LABELS_URL, LabelRefresh, LabelSource, StemError, ensure_labels,
    labels::write_atomically,
};

/// WHAT: IfMissing reuses an existing label file without network access
/// WHY: Offline runs must work once the class map has been fetched
#[test]
fn given_existing_file_and_if_missing_policy_when_ensuring_then_file_reused() {
    // Given: A local label file and an unreachable URL
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yamnet_class_map.csv");
    std::fs::write(&path, "Speech\n").unwrap();
    let source = LabelSource {
        url: "http://127.0.0.1:9/unreachable.csv".to_string(),
        path: path.clone(),
        refresh: LabelRefresh::IfMissing,
    };

    // When: Ensuring labels
    let resolved = ensure_labels(&source).unwrap();

    // Then: The existing file is returned untouched
    assert_eq!(resolved, path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Speech\n");
}

/// WHAT: Always policy downloads even when the file exists
/// WHY: Default behaviour refreshes the class map on every run
#[test]
fn given_existing_file_and_always_policy_when_url_unreachable_then_download_error() {
    // Given: A local label file and an unreachable URL
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yamnet_class_map.csv");
    std::fs::write(&path, "Speech\n").unwrap();
    let source = LabelSource {
        url: "http://127.0.0.1:9/unreachable.csv".to_string(),
        path: path.clone(),
        refresh: LabelRefresh::Always,
    };

    // When: Ensuring labels
    let result = ensure_labels(&source);

    // Then: The download is attempted and fails, leaving the old file intact
    assert!(matches!(result, Err(StemError::LabelDownloadFailed { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Speech\n");
}

/// WHAT: Atomic write creates missing parents and leaves no temp file
/// WHY: The label file must appear complete or not at all
#[test]
fn given_nested_dest_when_writing_atomically_then_file_written_without_temp() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("labels").join("yamnet_class_map.csv");

    write_atomically(&dest, b"Speech\n").unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "Speech\n");
    assert!(!dest.with_extension("download").exists());
}

/// WHAT: A failed rename removes the temp file
/// WHY: Failed refreshes must not litter the data directory
#[test]
fn given_dest_is_directory_when_writing_atomically_then_error_and_temp_removed() {
    // Given: A destination path occupied by a non-empty directory
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("yamnet_class_map.csv");
    std::fs::create_dir(&dest).unwrap();
    std::fs::write(dest.join("keep"), "x").unwrap();

    // When: Writing over it
    let result = write_atomically(&dest, b"Speech\n");

    // Then: The error surfaces and the temp sibling is gone
    assert!(matches!(result, Err(StemError::Io { .. })));
    assert!(!dest.with_extension("download").exists());
    assert!(dest.is_dir());
}

/// WHAT: The upstream class map downloads and parses to 521 names
/// WHY: Confirms the default URL still serves the YAMNet class map
#[test]
#[cfg(feature = "integration-tests")]
fn given_default_url_when_fetching_then_yamnet_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels").join("yamnet_class_map.csv");

    crate::fetch_labels(DEFAULT_LABELS_URL, &path).unwrap();
    let vocabulary = crate::Vocabulary::from_path(&path).unwrap();

    assert_eq!(vocabulary.len(), 521);
}

#[test]
fn given_default_url_when_inspecting_then_points_at_yamnet_class_map() {
    assert!(DEFAULT_LABELS_URL.ends_with("/yamnet_class_map.csv"));
}
