use serde_json::Value;

use crate::constants::{
    NO_DESCRIPTION, NO_GUIDANCE, NO_PARAMETERS, NO_PARAMETER_LABEL, NO_TITLE, UNKNOWN_FAMILY,
    UNKNOWN_HREF, UNKNOWN_ID,
};
use crate::types::ControlRecord;

/// Flatten one raw control node into a display record.
///
/// Every lookup has an explicit default because the source schema treats
/// most per-control fields as optional; extraction never fails.
pub fn extract_control(control: &Value, category: &str) -> ControlRecord {
    ControlRecord {
        id: string_or(control, "id", UNKNOWN_ID),
        title: string_or(control, "title", NO_TITLE),
        category: category.to_string(),
        family: string_or(control, "class", UNKNOWN_FAMILY),
        description: part_prose(control, "statement")
            .map(|prose| format_text(&prose))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        guidance: part_prose(control, "guidance")
            .map(|prose| format_text(&prose))
            .unwrap_or_else(|| NO_GUIDANCE.to_string()),
        parameters: extract_parameters(control),
        related: extract_related(control),
    }
}

fn string_or(node: &Value, key: &str, default: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Prose of the first part with the given name, if present. A matching
/// part without prose counts as absent.
fn part_prose(control: &Value, part_name: &str) -> Option<String> {
    let parts = control.get("parts").and_then(Value::as_array)?;
    let part = parts
        .iter()
        .find(|part| part.get("name").and_then(Value::as_str) == Some(part_name))?;
    part.get("prose")
        .and_then(Value::as_str)
        .map(|prose| prose.to_string())
}

/// Newline-joined `id: label` pairs from the control's `params` list.
fn extract_parameters(control: &Value) -> String {
    match control.get("params").and_then(Value::as_array) {
        Some(params) => params
            .iter()
            .map(|param| {
                format!(
                    "{}: {}",
                    string_or(param, "id", UNKNOWN_ID),
                    string_or(param, "label", NO_PARAMETER_LABEL)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        None => NO_PARAMETERS.to_string(),
    }
}

/// Comma-joined `href`s from the control's `links` list; an absent or
/// empty list yields an empty string.
fn extract_related(control: &Value) -> String {
    control
        .get("links")
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .map(|link| string_or(link, "href", UNKNOWN_HREF))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

/// Break prose into sentences and prefix each with a checkmark marker,
/// joined with `<br>` line breaks for the detail view. Sentences keep
/// their terminating period; empty fragments are dropped.
pub fn format_text(text: &str) -> String {
    let fragments: Vec<&str> = text.split(". ").collect();
    let count = fragments.len();
    fragments
        .into_iter()
        .enumerate()
        .filter_map(|(i, fragment)| {
            let sentence = fragment.trim();
            if sentence.is_empty() {
                return None;
            }
            if i + 1 < count {
                Some(format!("✔ {sentence}."))
            } else {
                Some(format!("✔ {sentence}"))
            }
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
