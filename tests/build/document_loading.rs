//! Tests for document loading.

use sort_priority::build::{load_documents, read_manifest, BuildError};
use sort_priority::IndexItem;
use std::path::Path;

const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

#[test]
fn test_load_documents_sorted_by_id() {
    let input_path = Path::new(BUILD_FIXTURES_DIR).join("valid");
    let manifest = read_manifest(&input_path).unwrap();
    let docs = load_documents(&input_path, &manifest).unwrap();

    let ids: Vec<usize> = docs.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_load_documents_reads_fields() {
    let input_path = Path::new(BUILD_FIXTURES_DIR).join("valid");
    let manifest = read_manifest(&input_path).unwrap();
    let docs = load_documents(&input_path, &manifest).unwrap();

    assert_eq!(docs[0].bundle(), Some("article"));
    assert_eq!(docs[0].weight(), None);
    assert_eq!(docs[4].weight(), Some(7));
    assert!(docs[5].field("sort_priority_weight").is_none());
}

#[test]
fn test_load_documents_invalid_json() {
    let input_path = Path::new(BUILD_FIXTURES_DIR).join("bad-document");
    let manifest = read_manifest(&input_path).unwrap();
    let err = load_documents(&input_path, &manifest).unwrap_err();
    assert!(matches!(err, BuildError::ParseDocument { ref file, .. } if file == "broken.json"));
}

#[test]
fn test_load_documents_missing_file() {
    let input_path = Path::new(BUILD_FIXTURES_DIR).join("valid");
    let mut manifest = read_manifest(&input_path).unwrap();
    manifest.documents.push("missing.json".to_string());
    let err = load_documents(&input_path, &manifest).unwrap_err();
    assert!(matches!(err, BuildError::ReadDocument { .. }));
}
