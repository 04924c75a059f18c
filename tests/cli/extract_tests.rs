//! Tests for the `extract` CLI command

use crate::common::{assert_contains, assert_valid_json, function_names, TestRepo};

#[test]
fn test_extract_python_text() {
    let repo = TestRepo::new();
    repo.add_file(
        "algo.py",
        "import os\n\ndef f(a, b):\n    x = a\n    return x + b\n\nclass C:\n    def m(self):\n        pass\n",
    );

    let output = repo.run_cli_success(&["extract", "algo.py"]);
    assert_eq!(output, "3-5\tf(a, b)\n");
}

#[test]
fn test_extract_cpp_json_qualifies_methods() {
    let repo = TestRepo::new();
    repo.add_file(
        "shapes.cpp",
        "#include <cmath>\n\nclass Circle {\npublic:\n    double area(double r) {\n        return 3.14 * r * r;\n    }\n};\n\nint main() {\n    return 0;\n}\n",
    );

    let output = repo.run_cli_success(&["extract", "shapes.cpp", "-f", "json"]);
    let json = assert_valid_json(&output, "extract json");

    assert_eq!(function_names(&json), vec!["Circle.area", "main"]);
    assert_eq!(json[0]["start_line"], 5);
    assert_eq!(json[0]["end_line"], 25);
    assert_eq!(json[0]["params"], "double r");
}

#[test]
fn test_extract_go_uses_regex_strategy() {
    let repo = TestRepo::new();
    repo.add_file(
        "main.go",
        "package main\n\nfunc add(a int, b int) {\n\tprintln(a + b)\n}\n",
    );

    let output = repo.run_cli_success(&["extract", "main.go", "--verbose"]);
    assert_contains(&output, "language: go\nstrategy: regex", true, "verbose header");
    assert_contains(&output, "3-23\tadd(a int, b int)", true, "go function");
}

#[test]
fn test_extract_no_functions() {
    let repo = TestRepo::new();
    repo.add_file("consts.py", "X = 1\nY = 2\n");

    let output = repo.run_cli_success(&["extract", "consts.py"]);
    assert_eq!(output, "No functions detected.\n");
}

#[test]
fn test_extract_syntax_error_exit_code() {
    let repo = TestRepo::new();
    repo.add_file("bad.py", "def broken(:\n    pass\n");

    let (code, stderr) = repo.run_cli_failure(&["extract", "bad.py"]);
    assert_eq!(code, Some(3));
    assert_contains(&stderr, "Failed to parse file", true, "parse error");
}

#[test]
fn test_extract_python2_source_exit_code() {
    let repo = TestRepo::new();
    repo.add_file("legacy.py", "def greet():\n    print \"hi\"\n");

    let (code, stderr) = repo.run_cli_failure(&["extract", "legacy.py"]);
    assert_eq!(code, Some(3));
    assert_contains(&stderr, "print statement", true, "python 2 statement");
}

#[test]
fn test_extract_missing_file_exit_code() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["extract", "nope.py"]);
    assert_eq!(code, Some(1));
    assert_contains(&stderr, "File not found", true, "missing file");
}
