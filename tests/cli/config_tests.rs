//! Tests for the `config` CLI command

use std::fs;

use crate::common::{assert_contains, TestRepo};

#[test]
fn test_config_show_defaults() {
    let repo = TestRepo::new();
    let output = repo.run_cli_success(&["config", "show"]);
    assert_contains(&output, "[model]", true, "model section");
    assert_contains(&output, "model/algo_recognizer.bin", true, "default model path");
    assert_contains(&output, "max_total_iter = 5000", true, "default budget");
}

#[test]
fn test_config_set_is_used_by_commands() {
    let repo = TestRepo::new();
    repo.run_cli_success(&["config", "set", "dataset.root", "corpus"]);
    assert_contains(
        &fs::read_to_string(repo.file("config.toml")).unwrap(),
        "root = \"corpus\"",
        true,
        "saved config",
    );

    repo.add_file("corpus/go/sort/quick/main.go", "func quick() {}\n");
    let output = repo.run_cli_success(&["dataset"]);
    assert_contains(&output, "Dataset generated with 1 examples", true, "configured root");

    let output = repo.run_cli_success(&["config", "reset"]);
    assert_contains(&output, "reset to defaults", true, "reset");
}

#[test]
fn test_config_get_reads_saved_value() {
    let repo = TestRepo::new();
    let output = repo.run_cli_success(&["config", "get", "training.max_total_iter"]);
    assert_eq!(output, "5000\n");

    repo.run_cli_success(&["config", "set", "dataset.extensions", "go,.cpp"]);
    let output = repo.run_cli_success(&["config", "get", "dataset.extensions"]);
    assert_eq!(output, "go, cpp\n");

    let (code, stderr) = repo.run_cli_failure(&["config", "get", "model.colour"]);
    assert_eq!(code, Some(5));
    assert_contains(&stderr, "Unknown configuration key: model.colour", true, "unknown key");
}

#[test]
fn test_config_unknown_key() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["config", "set", "model.colour", "red"]);
    assert_eq!(code, Some(5));
    assert_contains(&stderr, "Unknown configuration key", true, "unknown key");
}

#[test]
fn test_invalid_config_file() {
    let repo = TestRepo::new();
    repo.add_file("broken.toml", "[model\n");
    let (code, _) = repo.run_cli_failure(&["--config", "broken.toml", "config", "show"]);
    assert_eq!(code, Some(5));
}
