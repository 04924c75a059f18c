//! Tests for the `predict` CLI command

use crate::common::{assert_contains, assert_known_language, assert_valid_json, TestRepo};

#[test]
fn test_predict_whole_file() {
    let repo = TestRepo::new();
    repo.train_model().add_file(
        "snippet.go",
        "func insertionSort(items []int) {\n\tkey := items[i]\n}\n",
    );

    let output = repo.run_cli_success(&["predict", "snippet.go", "-f", "json"]);
    let json = assert_valid_json(&output, "predict json");
    assert_known_language(&json["language"]);
    assert!(json["tags"].is_array());

    let output = repo.run_cli_success(&["predict", "snippet.go"]);
    assert_contains(&output, "Predicted language: ", true, "language line");
    assert_contains(&output, "Predicted tags: [", true, "tags line");
}

#[test]
fn test_predict_missing_file() {
    let repo = TestRepo::new();
    let (code, _) = repo.run_cli_failure(&["predict", "nope.go"]);
    assert_eq!(code, Some(1));
}
