//! Human and machine readable renderings of scan results

use std::fmt::Write;

use crate::error::Result;
use crate::schema::AnnotatedFunction;

const RULE_WIDTH: usize = 60;

/// Render annotated functions as text.
///
/// Functions without predicted tags are skipped unless `include_untagged` is set.
pub fn render_text(functions: &[AnnotatedFunction], include_untagged: bool) -> String {
    let mut output = String::new();

    if functions.is_empty() {
        output.push_str("No functions detected.\n");
        return output;
    }

    for annotated in functions {
        if annotated.prediction.tags.is_empty() && !include_untagged {
            continue;
        }
        let function = &annotated.function;
        let tags: Vec<&str> = annotated.prediction.tags.iter().map(String::as_str).collect();

        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        let _ = writeln!(output, "Function: {}", function.name);
        let _ = writeln!(output, "Lines: {}-{}", function.start_line, function.end_line);
        let _ = writeln!(output, "Predicted language: {}", annotated.prediction.language);
        let _ = writeln!(output, "Predicted tags: [{}]", tags.join(", "));
        output.push('\n');
        output.push_str(&indent(&function.snippet, "    "));
        output.push('\n');
    }

    output
}

/// Render the full annotated list as pretty JSON
pub fn render_json(functions: &[AnnotatedFunction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(functions)?)
}

/// Prefix every non-blank line with `prefix`
fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
