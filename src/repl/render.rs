use serde_json::Value;

use super::history::HistoryEntry;
use crate::query::render_value;
use crate::ui::Style;

pub const PROMPT: &str = ">";
pub const CONTINUATION_PROMPT: &str = "…";
pub const LOADING_MESSAGE: &str = "Evaluating...";

/// Text for an entry's output, or `None` when there is nothing to show.
/// An empty string value shows nothing, like a missing one.
pub fn output_text(entry: &HistoryEntry) -> Option<String> {
    match entry.output.as_ref()? {
        Value::String(s) if s.is_empty() => None,
        value => Some(render_value(value)),
    }
}

/// Renders the result lines of an entry. Output and error are independent:
/// an entry carrying both shows both.
pub fn result_lines(entry: &HistoryEntry) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(output) = output_text(entry) {
        lines.push(output);
    }
    if let Some(error) = &entry.error {
        lines.push(Style::error(error));
    }
    lines
}

/// Renders the echoed input followed by the result lines.
pub fn entry_lines(entry: &HistoryEntry) -> Vec<String> {
    let mut lines: Vec<String> = entry
        .input
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let prompt = if i == 0 { PROMPT } else { CONTINUATION_PROMPT };
            format!("{} {line}", Style::prompt(prompt))
        })
        .collect();
    lines.extend(result_lines(entry));
    lines
}

/// Renders all entries in insertion order.
pub fn history_lines(history: &[HistoryEntry]) -> Vec<String> {
    history.iter().flat_map(entry_lines).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(input: &str, output: Option<serde_json::Value>, error: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            input: input.to_string(),
            output,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_success_renders_value_only() {
        let lines = result_lines(&entry("(+ 2 3)", Some(json!("5")), None));
        assert_eq!(lines, vec!["5".to_string()]);
    }

    #[test]
    fn test_partial_failure_renders_both() {
        let lines = result_lines(&entry("(inc 1 2)", Some(json!("42")), Some("ARITY")));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "42");
        assert!(lines[1].contains("ARITY"));
    }

    #[test]
    fn test_empty_string_value_renders_nothing() {
        let lines = result_lines(&entry("(str)", Some(json!("")), None));
        assert!(lines.is_empty());

        let lines = result_lines(&entry("(str)", Some(json!("")), Some("ARITY")));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ARITY"));
    }

    #[test]
    fn test_non_string_values_always_render() {
        assert_eq!(result_lines(&entry("0", Some(json!(0)), None)), vec!["0"]);
        assert_eq!(
            result_lines(&entry("false", Some(json!(false)), None)),
            vec!["false"]
        );
    }

    #[test]
    fn test_error_only() {
        let lines = result_lines(&entry("(bad-fn)", None, Some("Unknown function")));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Unknown function"));
    }

    #[test]
    fn test_entry_lines_echo_multiline_input() {
        let lines = entry_lines(&entry("(+ 1\n   2)", Some(json!(3)), None));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("(+ 1"));
        assert!(lines[1].contains("   2)"));
        assert_eq!(lines[2], "3");
    }

    #[test]
    fn test_history_lines_keep_order() {
        let history = vec![
            entry("1", Some(json!("1")), None),
            entry("2", Some(json!("2")), None),
        ];
        let lines = history_lines(&history);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains('1'));
        assert_eq!(lines[1], "1");
        assert!(lines[2].contains('2'));
        assert_eq!(lines[3], "2");
    }
}
