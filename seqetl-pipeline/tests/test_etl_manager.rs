//! Integration tests for EtlManager::process()
//!
//! These tests run the full validate, extract, transform and load workflow over
//! participant directories built in a temp dir, and check the written result file.
//!
//! Note: the individual stages are unit tested in their own modules under src/

use std::fs::{create_dir_all, read_to_string, write};
use std::path::Path;

use seqetl_pipeline::{EtlManager, PipelineConfig, PipelineError, PipelineInput, Stage};
use serde_json::{Value, json};
use tempfile::TempDir;

const UUID: &str = "f3324a99-8a63-4ada-9d1d-562f84c7636d";
const OTHER_UUID: &str = "0b7e2f0c-1d7d-4c43-9a55-3c1f5e1a9b11";

const DNA: &str = "GGTAAGTGCTCTAGTACAAACACCCCCAATATTGTGATATAATTAAAATTATATTCATAT\n\
                   TCTGTTGCCAGAAAAAACACTTTTAGGCTATATTAGAGCCATCTTCTTTGAAGCGTTGTC\n";

const METADATA: &str = r#"{
    "individual_metadata": {
        "_full_name": "John Doe",
        "date_of_birth": "1980-01-01",
        "enrollment_date": "2019-04-12"
    },
    "_internal_notes": "remove me"
}"#;

/// Helper function to lay out `<root>/<uuid>/` with the given files and an empty `out/`
fn create_participant(root: &Path, uuid: &str, dna: &str, metadata: &str) -> PipelineInput {
    let context_path = root.join(uuid);
    let results_path = context_path.join("out");
    create_dir_all(&results_path).expect("Failed to create participant directory");

    write(context_path.join(format!("{}_dna.txt", uuid)), dna).expect("Failed to write");
    write(context_path.join(format!("{}_metadata.json", uuid)), metadata)
        .expect("Failed to write");

    PipelineInput::new(context_path, results_path)
}

fn read_result(path: &Path) -> Value {
    let content = read_to_string(path).expect("Failed to read result file");
    serde_json::from_str(&content).expect("Result file is not valid JSON")
}

fn failed_stage(result: Result<std::path::PathBuf, PipelineError>) -> (Stage, PipelineError) {
    match result {
        Err(PipelineError::Failed { stage, source }) => (stage, *source),
        other => panic!("Expected a failed run, got {:?}", other),
    }
}

#[test]
fn test_process_writes_result_file() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let input = create_participant(tempdir.path(), UUID, DNA, METADATA);

    let manager = EtlManager::new(input.clone(), PipelineConfig::default());
    let output = manager.process().expect("Pipeline failed");

    assert_eq!(
        output,
        input.results_path.join(format!("{}_result.json", UUID))
    );

    let result = read_result(&output);

    let metadata = &result["metadata"];
    assert!(metadata["start_at"].is_string());
    assert!(metadata["end_at"].is_string());
    assert_eq!(
        metadata["context_path"],
        json!(input.context_path.display().to_string())
    );
    assert_eq!(
        metadata["results_path"],
        json!(input.results_path.display().to_string())
    );

    let results = result["results"].as_array().expect("results is an array");
    assert_eq!(results.len(), 1);

    let participant = &results[0];
    assert_eq!(participant["participant"], json!({"_id": UUID}));

    // sensitive keys are gone at every depth
    assert_eq!(
        participant["json"],
        json!({
            "individual_metadata": {
                "date_of_birth": "1980-01-01",
                "enrollment_date": "2019-04-12"
            }
        })
    );

    let txt = &participant["txt"];
    assert_eq!(txt["sequences"].as_array().map(|s| s.len()), Some(2));
    assert!(txt["most_common_codon"].is_array());
    assert_eq!(txt["lcs"][0]["sequences"], json!([1, 2]));
}

#[test]
fn test_process_twice_overwrites() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let input = create_participant(tempdir.path(), UUID, DNA, METADATA);
    let manager = EtlManager::new(input, PipelineConfig::default());

    let first = manager.process().expect("First run failed");
    let first_result = read_result(&first);

    let second = manager.process().expect("Second run failed");
    let second_result = read_result(&second);

    assert_eq!(first, second);
    assert_eq!(first_result["results"], second_result["results"]);

    let outputs = std::fs::read_dir(second.parent().unwrap()).unwrap().count();
    assert_eq!(outputs, 1);
}

#[test]
fn test_process_long_sequence() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let dna = "ATCG".repeat(100_000);
    let input = create_participant(tempdir.path(), UUID, &dna, METADATA);

    let output = EtlManager::new(input, PipelineConfig::default())
        .process()
        .expect("Pipeline failed");
    let result = read_result(&output);

    let txt = &result["results"][0]["txt"];
    assert_eq!(txt["sequences"][0]["gc_content"], json!(50.0));
    // a single sequence has no pairs to compare
    assert_eq!(txt["lcs"], json!([]));
}

#[test]
fn test_process_participant_too_young() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let metadata = r#"{"individual_metadata": {"date_of_birth": "2015-06-01"}}"#;
    let input = create_participant(tempdir.path(), UUID, DNA, metadata);

    let (stage, source) = failed_stage(EtlManager::new(input, PipelineConfig::default()).process());

    assert_eq!(stage, Stage::Transform);
    assert!(matches!(source, PipelineError::Metadata(_)));
}

#[test]
fn test_process_empty_dna_file() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let input = create_participant(tempdir.path(), UUID, "\n\n", METADATA);

    let result = EtlManager::new(input.clone(), PipelineConfig::default()).process();
    let (stage, source) = failed_stage(result);

    assert_eq!(stage, Stage::Transform);
    assert!(matches!(source, PipelineError::SeqStats(_)));
    // nothing is written when a stage fails
    assert!(!input.results_path.join(format!("{}_result.json", UUID)).exists());
}

#[test]
fn test_process_foreign_file() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let input = create_participant(tempdir.path(), UUID, DNA, METADATA);
    write(
        input.context_path.join(format!("{}_dna.txt", OTHER_UUID)),
        DNA,
    )
    .expect("Failed to write");

    let (stage, source) = failed_stage(EtlManager::new(input, PipelineConfig::default()).process());

    assert_eq!(stage, Stage::Validate);
    assert!(matches!(source, PipelineError::Validation(_)));
}

#[test]
fn test_process_error_message_names_stage() {
    let tempdir = TempDir::new().expect("Failed to create temp dir");
    let input = PipelineInput::new(tempdir.path().join(UUID), tempdir.path().join("out"));

    let error = EtlManager::new(input, PipelineConfig::default())
        .process()
        .unwrap_err();

    assert!(
        error
            .to_string()
            .starts_with("ETL process failed during validate:")
    );
}
