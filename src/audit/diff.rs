//! Diff generation for audit entries
//!
//! Summarises which top-level fields of an entity snapshot changed.

use serde_json::Value;

/// Generate a human-readable diff between two JSON snapshots
///
/// Only top-level field changes are reported; arrays are summarised by
/// their length. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_balance_change() {
        let before = json!({"name": "Ada", "balance": 0});
        let after = json!({"name": "Ada", "balance": 10000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "balance: 0 -> 10000");
    }

    #[test]
    fn test_array_change_summary() {
        let before = json!({"enrolled_courses": []});
        let after = json!({"enrolled_courses": ["CS101"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "enrolled_courses: [0 items] -> [1 items]");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"old": "value"});
        let after = json!({"new": 1});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"value\" -> (removed)"));
        assert!(diff.contains("new: (added) -> 1"));
    }

    #[test]
    fn test_no_changes() {
        let snapshot = json!({"name": "Ada", "balance": 100});
        assert!(generate_diff(&snapshot, &snapshot).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"email": "é".repeat(100)});
        let after = json!({"email": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
        assert!(generate_diff(&json!(null), &json!(null)).is_none());
    }
}
