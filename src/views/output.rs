//! Output value rendering
//!
//! Renders the named result values recorded in state, one line per entry in
//! name order. Shared by any command that reports outputs.

use std::collections::BTreeMap;

use crate::engine::state::OutputValue;
use crate::views::View;

/// Render each output as a `name = value` line.
///
/// Values are formatted as JSON; sensitive values are masked.
pub fn render_outputs(view: &View, values: &BTreeMap<String, OutputValue>) {
    for (name, output) in values {
        if output.sensitive {
            view.streams()
                .println(&format!("{name} = {}", view.dim("(sensitive value)")));
        } else {
            let rendered = serde_json::to_string(&output.value)
                .unwrap_or_else(|_| "(unrenderable value)".to_string());
            view.streams().println(&format!("{name} = {rendered}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_view;
    use serde_json::json;

    fn output(value: serde_json::Value) -> OutputValue {
        OutputValue {
            value,
            sensitive: false,
        }
    }

    #[test]
    fn test_empty_map_renders_nothing() {
        let (view, out, _err) = test_view();
        render_outputs(&view, &BTreeMap::new());
        assert!(out.contents().is_empty());
    }

    #[test]
    fn test_one_line_per_entry_in_name_order() {
        let (view, out, _err) = test_view();
        let mut values = BTreeMap::new();
        values.insert("zone".to_string(), output(json!("b")));
        values.insert("count".to_string(), output(json!(2)));

        render_outputs(&view, &values);

        assert_eq!(out.lines(), vec!["count = 2", "zone = \"b\""]);
    }

    #[test]
    fn test_sensitive_value_masked() {
        let (view, out, _err) = test_view();
        let mut values = BTreeMap::new();
        values.insert(
            "api_key".to_string(),
            OutputValue {
                value: json!("s3cr3t"),
                sensitive: true,
            },
        );

        render_outputs(&view, &values);

        assert_eq!(out.lines(), vec!["api_key = (sensitive value)"]);
        assert!(!out.contents().contains("s3cr3t"));
    }

    #[test]
    fn test_structured_value_rendered_as_json() {
        let (view, out, _err) = test_view();
        let mut values = BTreeMap::new();
        values.insert("tags".to_string(), output(json!(["a", "b"])));

        render_outputs(&view, &values);

        assert_eq!(out.lines(), vec![r#"tags = ["a","b"]"#]);
    }
}
