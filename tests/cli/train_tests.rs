//! Tests for the `train` CLI command

use crate::common::{assert_contains, assert_valid_json, TestRepo};

#[test]
fn test_train_then_update() {
    let repo = TestRepo::new();
    repo.with_algorithm_tree();
    repo.run_cli_success(&["dataset"]);

    let output = repo.run_cli_success(&["train", "--max-total-iter", "2000"]);
    assert_contains(&output, "Trained model at", true, "fresh training");
    assert_contains(&output, "examples: 4", true, "example count");
    assert!(repo.file("model/algo_recognizer.bin").exists());

    let output = repo.run_cli_success(&["train", "--max-total-iter", "2000"]);
    assert_contains(&output, "Updated model at", true, "incremental training");

    let output = repo.run_cli_success(&["train", "--fresh", "--max-total-iter", "2000"]);
    assert_contains(&output, "Trained model at", true, "forced fresh training");
}

#[test]
fn test_train_json_report() {
    let repo = TestRepo::new();
    repo.with_algorithm_tree();
    repo.run_cli_success(&["dataset"]);

    let output = repo.run_cli_success(&[
        "train", "--model", "custom.bin", "--max-total-iter", "2000", "-f", "json",
    ]);
    let json = assert_valid_json(&output, "train json");
    assert_eq!(json["model"], "custom.bin");
    assert_eq!(json["report"]["examples"], 4);
    assert_eq!(
        json["report"]["tags"],
        serde_json::json!(["binary", "insertion", "search", "sort"])
    );
    assert!(repo.file("custom.bin").exists());
}

#[test]
fn test_train_missing_dataset() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["train"]);
    assert_eq!(code, Some(1));
    assert_contains(&stderr, "train.json", true, "missing dataset path");
}

#[test]
fn test_train_rejects_zero_budget() {
    let repo = TestRepo::new();
    let (code, _) = repo.run_cli_failure(&["train", "--initial-iter", "0"]);
    assert_eq!(code, Some(5));
}
