//! TestRepo builder for integration testing
//!
//! Creates throwaway directory trees (labelled algorithm sources, scan targets) and
//! runs the algo-recognizer binary inside them with an isolated configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test repository
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the test repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the repository
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Add a source file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Populate `algorithms/` with a small labelled tree in three languages
    pub fn with_algorithm_tree(&self) -> &Self {
        self.add_file(
            "algorithms/python/sort/insertion/main.py",
            "def insertion_sort(items):\n    for i in range(1, len(items)):\n        key = items[i]\n        j = i - 1\n        while j >= 0 and items[j] > key:\n            items[j + 1] = items[j]\n            j -= 1\n        items[j + 1] = key\n    return items\n",
        )
        .add_file(
            "algorithms/python/search/binary/main.py",
            "def binary_search(items, target):\n    low, high = 0, len(items) - 1\n    while low <= high:\n        mid = (low + high) // 2\n        if items[mid] == target:\n            return mid\n        if items[mid] < target:\n            low = mid + 1\n        else:\n            high = mid - 1\n    return -1\n",
        )
        .add_file(
            "algorithms/go/sort/insertion/main.go",
            "package main\n\nfunc insertionSort(items []int) {\n\tfor i := 1; i < len(items); i++ {\n\t\tkey := items[i]\n\t\tj := i - 1\n\t\tfor j >= 0 && items[j] > key {\n\t\t\titems[j+1] = items[j]\n\t\t\tj--\n\t\t}\n\t\titems[j+1] = key\n\t}\n}\n",
        )
        .add_file(
            "algorithms/cpp/search/binary/main.cpp",
            "int binary_search(int* items, int n, int target) {\n    int low = 0, high = n - 1;\n    while (low <= high) {\n        int mid = (low + high) / 2;\n        if (items[mid] == target) return mid;\n        if (items[mid] < target) low = mid + 1; else high = mid - 1;\n    }\n    return -1;\n}\n",
        )
    }

    /// Run algo-recognizer CLI command and return output
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_algo-recognizer"))
            .current_dir(self.path())
            .env("ALGO_RECOGNIZER_CONFIG", self.file("config.toml"))
            .env_remove("ALGO_RECOGNIZER_MODEL")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (exit code, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (Option<i32>, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    /// Generate the dataset and train a model with the default paths
    pub fn train_model(&self) -> &Self {
        self.with_algorithm_tree();
        self.run_cli_success(&["dataset"]);
        self.run_cli_success(&["train", "--max-total-iter", "2000"]);
        self
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
