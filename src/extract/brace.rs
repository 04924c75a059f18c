//! Brace-tracking extraction for C++-style sources
//!
//! A single forward pass over trimmed lines keeps two stacks: the names of enclosing
//! classes/structs and the currently open braces. A scope name lives until the brace
//! that opened its body is closed, so methods come out as `Outer.Inner.method`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::windowed_record;
use crate::schema::FunctionRecord;

static SCOPE_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\b(?:class|struct)\s+(\w+)").expect("scope head regex")
});

static FUNCTION_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\b(?:void|int|float|double|char|bool|string)\s+(\w+)\s*\(([^)]*)\)\s*\{")
        .expect("function head regex")
});

/// An open `{`, remembering whether it opened a class/struct body
#[derive(Debug, Clone, Copy)]
struct BraceFrame {
    owns_scope: bool,
}

#[derive(Debug, Default)]
struct ScopeTracker {
    scopes: Vec<String>,
    braces: Vec<BraceFrame>,
    /// Scope declared but whose body brace has not been seen yet
    pending: Option<String>,
}

impl ScopeTracker {
    fn declare(&mut self, name: &str) {
        self.pending = Some(name.to_string());
    }

    fn open(&mut self) {
        let owns_scope = match self.pending.take() {
            Some(name) => {
                self.scopes.push(name);
                true
            }
            None => false,
        };
        self.braces.push(BraceFrame { owns_scope });
    }

    fn close(&mut self) {
        if let Some(frame) = self.braces.pop() {
            if frame.owns_scope {
                self.scopes.pop();
            }
        }
    }

    fn qualify(&self, name: &str) -> String {
        if self.scopes.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.scopes.join("."), name)
        }
    }
}

/// Extract functions from C++-style source. Never fails.
pub fn extract(source: &str) -> Vec<FunctionRecord> {
    let lines: Vec<&str> = source.lines().collect();
    let mut tracker = ScopeTracker::default();
    let mut records = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if let Some(caps) = SCOPE_HEAD.captures(line) {
            let forward_declaration = line.contains(';') && !line.contains('{');
            if !forward_declaration {
                tracker.declare(&caps[1]);
            }
        }

        for c in line.chars() {
            match c {
                '{' => tracker.open(),
                '}' => tracker.close(),
                _ => {}
            }
        }

        if let Some(caps) = FUNCTION_HEAD.captures(line) {
            let name = tracker.qualify(&caps[1]);
            let params = caps[2].trim().to_string();
            records.push(windowed_record(&lines, name, Some(params), index + 1));
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SNIPPET_WINDOW;

    #[test]
    fn test_method_is_qualified_by_class() {
        let source = r#"#include <vector>

class Foo {
public:
    void bar(int x) {
        x++;
    }
};
"#;
        let records = extract(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Foo.bar");
        assert_eq!(records[0].start_line, 5);
        assert_eq!(records[0].end_line, 25);
        assert_eq!(records[0].params.as_deref(), Some("int x"));
    }

    #[test]
    fn test_scope_ends_with_its_brace() {
        let source = r#"struct Node {
    int value() { return v; }
};

int main() {
    return 0;
}
"#;
        let records = extract(source);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Node.value", "main"]);
    }

    #[test]
    fn test_nested_classes() {
        let source = r#"class Outer {
    class Inner {
        void deep() {
        }
    };
    void shallow() {
    }
};
"#;
        let records = extract(source);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Outer.Inner.deep", "Outer.shallow"]);
    }

    #[test]
    fn test_class_brace_on_next_line() {
        let source = "class Sorter\n{\n    void sort() {\n    }\n};\nvoid free_fn() {\n}\n";
        let records = extract(source);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Sorter.sort", "free_fn"]);
    }

    #[test]
    fn test_forward_declaration_does_not_open_scope() {
        let source = "class Foo;\nint main() {\n    return 0;\n}\n";
        let records = extract(source);
        assert_eq!(records[0].name, "main");
    }

    #[test]
    fn test_fixed_window_regardless_of_closure() {
        let source = "int one() {\n    return 1;\n}\nint two() {\n    return 2;\n}\n";
        let records = extract(source);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.end_line, record.start_line + SNIPPET_WINDOW);
            assert_eq!(record.line_count(), SNIPPET_WINDOW + 1);
        }
        // Short functions pick up trailing unrelated lines.
        assert!(records[0].snippet.contains("int two()"));
    }

    #[test]
    fn test_untyped_heads_are_ignored() {
        let source = "auto lambda = []() {\n};\nstd::vector<int> make() {\n}\n";
        assert!(extract(source).is_empty());
    }
}
