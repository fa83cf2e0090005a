//! End-to-end tests for the build workflow.

use sort_priority::build::{run_build, BuildError, BuildOptions, Document, OUTPUT_FILE};
use sort_priority::{AttachError, IndexItem, SortDirection};
use std::fs;
use tempfile::TempDir;

const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

fn read_output(path: &std::path::Path) -> Vec<Document> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn weights(docs: &[Document]) -> Vec<(usize, Option<i64>)> {
    docs.iter().map(|d| (d.id, d.weight())).collect()
}

#[test]
fn test_run_build_e2e_basic() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/valid", BUILD_FIXTURES_DIR);

    let summary = run_build(
        &input_path,
        output_path.to_str().unwrap(),
        &BuildOptions::default(),
    )
    .unwrap();

    assert_eq!(summary.documents, 6);
    assert_eq!(summary.stats.weighted, 4);
    assert_eq!(summary.stats.skipped, 2);
    assert_eq!(summary.output_file, output_path.join(OUTPUT_FILE));

    let docs = read_output(&summary.output_file);
    assert_eq!(
        weights(&docs),
        vec![
            (0, Some(5)),
            (1, Some(-3)),
            (2, Some(0)),
            (3, Some(5)),
            (4, Some(7)),
            (5, None),
        ]
    );
}

#[test]
fn test_run_build_keeps_other_fields() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/valid", BUILD_FIXTURES_DIR);

    let summary = run_build(
        &input_path,
        output_path.to_str().unwrap(),
        &BuildOptions::default(),
    )
    .unwrap();

    let docs = read_output(&summary.output_file);
    assert_eq!(docs[0].datasource.as_deref(), Some("entity:node"));
    assert_eq!(
        docs[0].field("title").unwrap().first().and_then(|v| v.as_str()),
        Some("Release notes")
    );
}

#[test]
fn test_run_build_is_idempotent_on_its_output() {
    let temp_dir = TempDir::new().unwrap();
    let first_out = temp_dir.path().join("first");
    let input_path = format!("{}/valid", BUILD_FIXTURES_DIR);

    let first = run_build(
        &input_path,
        first_out.to_str().unwrap(),
        &BuildOptions::default(),
    )
    .unwrap();
    let docs = read_output(&first.output_file);

    // Feed the output back in as a fresh input directory.
    let second_in = temp_dir.path().join("second-in");
    fs::create_dir_all(&second_in).unwrap();
    let mut names = Vec::new();
    for doc in &docs {
        let name = format!("{}.json", doc.id);
        fs::write(second_in.join(&name), serde_json::to_string(doc).unwrap()).unwrap();
        names.push(name);
    }
    let manifest = fs::read_to_string(format!("{}/manifest.json", input_path)).unwrap();
    let mut manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    manifest["documents"] = serde_json::json!(names);
    fs::write(second_in.join("manifest.json"), manifest.to_string()).unwrap();

    let second_out = temp_dir.path().join("second-out");
    let second = run_build(
        second_in.to_str().unwrap(),
        second_out.to_str().unwrap(),
        &BuildOptions::default(),
    )
    .unwrap();

    assert_eq!(second.stats.weighted, 0);
    assert_eq!(read_output(&second.output_file), docs);
}

#[test]
fn test_run_build_with_config_override() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/with-config", BUILD_FIXTURES_DIR);

    let options = BuildOptions {
        config_path: Some(format!("{}/settings.json", input_path).into()),
        sort: None,
    };
    let summary = run_build(&input_path, output_path.to_str().unwrap(), &options).unwrap();

    // Explicit zero policy: article keeps its configured 0 instead of the default 2.
    let docs = read_output(&summary.output_file);
    assert_eq!(weights(&docs), vec![(0, Some(0)), (1, Some(9))]);
}

#[test]
fn test_run_build_sorted_descending() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/valid", BUILD_FIXTURES_DIR);

    let options = BuildOptions {
        config_path: None,
        sort: Some(SortDirection::Descending),
    };
    let summary = run_build(&input_path, output_path.to_str().unwrap(), &options).unwrap();

    let ids: Vec<usize> = read_output(&summary.output_file)
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![4, 0, 3, 2, 1, 5]);
}

#[test]
fn test_run_build_refuses_unsupported_index() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/unsupported", BUILD_FIXTURES_DIR);

    let err = run_build(
        &input_path,
        output_path.to_str().unwrap(),
        &BuildOptions::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        BuildError::Attach(AttachError::UnsupportedIndex {
            index_id: "people".to_string(),
            entity_type: "node".to_string(),
        })
    );
    assert!(!output_path.exists(), "nothing should be written");
}

#[test]
fn test_run_build_e2e_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");

    let result = run_build(
        temp_dir.path().to_str().unwrap(),
        output_path.to_str().unwrap(),
        &BuildOptions::default(),
    );

    assert!(result.is_err(), "Build should fail without manifest");
}
