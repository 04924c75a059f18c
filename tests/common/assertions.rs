//! Custom assertions for integration tests

use serde_json::Value;

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Assert that output contains a specific string
pub fn assert_contains(output: &str, needle: &str, case_sensitive: bool, context: &str) {
    let found = if case_sensitive {
        output.contains(needle)
    } else {
        output.to_lowercase().contains(&needle.to_lowercase())
    };
    assert!(
        found,
        "Expected output to contain '{}' ({})\nOutput:\n{}",
        needle, context, output
    );
}

/// Assert that output does NOT contain a specific string
pub fn assert_not_contains(output: &str, needle: &str, context: &str) {
    assert!(
        !output.contains(needle),
        "Expected output NOT to contain '{}' ({})\nOutput:\n{}",
        needle,
        context,
        output
    );
}

/// Names of the functions in a JSON function list
pub fn function_names(json: &Value) -> Vec<String> {
    json.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Assert that a JSON language label is one of the known labels
pub fn assert_known_language(value: &Value) {
    let label = value.as_str().unwrap_or_default();
    assert!(
        ["go", "cpp", "python", "unknown"].contains(&label),
        "Unexpected language label {:?}",
        value
    );
}
