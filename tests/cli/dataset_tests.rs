//! Tests for the `dataset` CLI command

use std::fs;

use crate::common::{assert_contains, assert_valid_json, TestRepo};

#[test]
fn test_dataset_generates_default_output() {
    let repo = TestRepo::new();
    repo.with_algorithm_tree();

    let output = repo.run_cli_success(&["dataset"]);
    assert_contains(&output, "Dataset generated with 4 examples", true, "summary");

    let content = fs::read_to_string(repo.file("datasets/train.json")).unwrap();
    let json = assert_valid_json(&content, "dataset file");
    let examples = json.as_array().unwrap();
    assert_eq!(examples.len(), 4);
    assert_eq!(examples[0]["tags"], serde_json::json!(["cpp", "search", "binary"]));
}

#[test]
fn test_dataset_custom_paths_and_extensions() {
    let repo = TestRepo::new();
    repo.add_file("corpus/go/graph/bfs/main.go", "func bfs() {}\n")
        .add_file("corpus/python/graph/bfs/main.py", "def bfs():\n    pass\n");

    let output = repo.run_cli_success(&[
        "dataset", "--root", "corpus", "--output", "out/set.json", "--ext", "py", "-f", "json",
    ]);
    let json = assert_valid_json(&output, "dataset json");
    assert_eq!(json["examples"], 1);
    assert_eq!(json["written"], true);
    assert!(repo.file("out/set.json").exists());
}

#[test]
fn test_dataset_empty_tree_not_written() {
    let repo = TestRepo::new();
    repo.add_file("algorithms/README.md", "# nothing here\n");

    let output = repo.run_cli_success(&["dataset"]);
    assert_contains(&output, "Dataset not generated", true, "empty tree");
    assert!(!repo.file("datasets/train.json").exists());
}

#[test]
fn test_dataset_missing_root() {
    let repo = TestRepo::new();
    let (code, _) = repo.run_cli_failure(&["dataset", "--root", "missing"]);
    assert_eq!(code, Some(1));
}
