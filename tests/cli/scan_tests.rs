//! Tests for the `scan` CLI command

use crate::common::{
    assert_contains, assert_known_language, assert_not_contains, assert_valid_json,
    function_names, TestRepo,
};

const TARGET: &str = "def bubble_sort(items):\n    for i in range(len(items)):\n        for j in range(len(items) - i - 1):\n            if items[j] > items[j + 1]:\n                items[j], items[j + 1] = items[j + 1], items[j]\n    return items\n\ndef helper():\n    return 0\n";

#[test]
fn test_scan_json_lists_every_function() {
    let repo = TestRepo::new();
    repo.train_model().add_file("target.py", TARGET);

    let output = repo.run_cli_success(&["scan", "target.py", "-f", "json"]);
    let json = assert_valid_json(&output, "scan json");

    assert_eq!(function_names(&json), vec!["bubble_sort", "helper"]);
    assert_eq!(json[0]["start_line"], 1);
    assert_eq!(json[0]["end_line"], 6);
    assert_known_language(&json[0]["language"]);
    assert!(json[0]["tags"].is_array());
}

#[test]
fn test_scan_text_with_all() {
    let repo = TestRepo::new();
    repo.train_model().add_file("target.py", TARGET);

    let output = repo.run_cli_success(&["scan", "target.py", "--all"]);
    assert_contains(&output, &"=".repeat(60), true, "rule");
    assert_contains(&output, "Function: bubble_sort", true, "first function");
    assert_contains(&output, "Function: helper", true, "second function");
    assert_contains(&output, "Lines: 8-9", true, "line range");
    assert_contains(&output, "    def helper():", true, "indented snippet");
}

#[test]
fn test_scan_model_flag_overrides_config() {
    let repo = TestRepo::new();
    repo.add_file("target.py", TARGET);

    let output = repo
        .run_cli(&["scan", "target.py", "--model", "elsewhere.bin"])
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "elsewhere.bin", true, "model path in error");
    assert_not_contains(&stderr, "algo_recognizer.bin", "default path unused");
}

#[test]
fn test_scan_without_model() {
    let repo = TestRepo::new();
    repo.add_file("target.py", TARGET);

    let (code, stderr) = repo.run_cli_failure(&["scan", "target.py"]);
    assert_eq!(code, Some(4));
    assert_contains(&stderr, "Model error", true, "model failure");
}

#[test]
fn test_scan_rejects_non_github_url() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["scan", "https://example.com/sort.py"]);
    assert_eq!(code, Some(2));
    assert_contains(&stderr, "Not a valid GitHub URL", true, "invalid url");
}
