//! Integration tests for combined manifest builds from a folder of chunks.

use std::fs;

use tempfile::TempDir;
use voxprep::manifest::{build_manifest, discover_inputs};
use voxprep::schema::{MappingOptions, TargetSchema};

fn options() -> MappingOptions {
    MappingOptions {
        source_lang: "eng".to_string(),
        target_lang: "fra".to_string(),
        sampling_rate: 16000,
    }
}

#[test]
fn test_discover_inputs_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chunks_2.jsonl"), "").unwrap();
    fs::write(dir.path().join("chunks_1.jsonl"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let files = discover_inputs(dir.path(), "chunks_*.jsonl").unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("chunks_1.jsonl"));
    assert!(files[1].ends_with("chunks_2.jsonl"));
}

#[test]
fn test_discover_inputs_errors_when_nothing_matches() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let err = discover_inputs(dir.path(), "*.jsonl").unwrap_err();
    assert!(err.to_string().contains("No files matching"));
}

#[test]
fn test_discover_inputs_errors_on_missing_folder() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent");

    let err = discover_inputs(&missing, "*.jsonl").unwrap_err();
    assert!(err.to_string().contains("Input folder not found"));
}

#[test]
fn test_build_manifest_combines_files_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("chunks_1.jsonl"),
        concat!(
            r#"{"sentence": "one", "audio": {"path": "/c/1.wav"}, "translation": "un"}"#,
            "\n",
            r#"{"sentence": "two", "audio": {"path": "/c/2.wav"}, "translation": "deux"}"#,
            "\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("chunks_2.jsonl"),
        concat!(
            r#"{"sentence": "three", "audio": {"path": "/c/3.wav"}, "translation": "trois"}"#,
            "\n",
        ),
    )
    .unwrap();

    let files = discover_inputs(dir.path(), "chunks_*.jsonl").unwrap();
    let output = dir.path().join("manifest.jsonl");

    let mut seen = Vec::new();
    let report = build_manifest(
        &files,
        &output,
        TargetSchema::Seamless,
        &options(),
        |file, file_report| seen.push((file.to_path_buf(), file_report.written)),
    )
    .unwrap();

    assert_eq!(report.files, 2);
    assert_eq!(report.totals.written, 3);
    assert_eq!(seen, vec![(files[0].clone(), 2), (files[1].clone(), 1)]);

    let lines: Vec<serde_json::Value> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["source"]["text"], "one");
    assert_eq!(lines[0]["target"]["text"], "un");
    assert_eq!(lines[0]["target"]["lang"], "fra");
    assert_eq!(lines[2]["source"]["audio_local_path"], "/c/3.wav");
}

#[test]
fn test_build_manifest_counts_skips_across_files() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.jsonl"),
        concat!(
            r#"{"sentence": "ok", "audio": {"path": "/c/1.wav"}}"#,
            "\n",
            "garbage line\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("b.jsonl"),
        concat!(r#"{"audio": {"path": "/c/2.wav"}}"#, "\n"),
    )
    .unwrap();

    let files = discover_inputs(dir.path(), "*.jsonl").unwrap();
    let output = dir.path().join("manifest.jsonl");
    let report = build_manifest(&files, &output, TargetSchema::Seamless, &options(), |_, _| {})
        .unwrap();

    assert_eq!(report.totals.read, 3);
    assert_eq!(report.totals.written, 1);
    assert_eq!(report.totals.skipped_malformed, 1);
    assert_eq!(report.totals.skipped_incomplete, 1);
}
