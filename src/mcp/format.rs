//! Turns upstream JSON into tool output text.

use serde_json::{Map, Value};

use super::operations::Output;

const PROJECT_FIELDS: [&str; 5] = ["name", "id", "identifier", "description", "project_lead"];

/// Render a successful response according to the operation's output kind.
pub fn render(output: Output, response: &Value) -> serde_json::Result<String> {
    match output {
        Output::Json => pretty(response),
        Output::ProjectSummary => pretty(&summarize_projects(response)),
        Output::IssueSummary => pretty(&summarize_issues(response)),
        Output::Confirm(message) => Ok(message.to_string()),
    }
}

/// Two-space indented JSON.
pub fn pretty(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Keep `name, id, identifier, description, project_lead` of each project.
/// Responses without a `results` list pass through unchanged.
pub fn summarize_projects(response: &Value) -> Value {
    let Some(results) = results(response) else {
        return response.clone();
    };

    results
        .iter()
        .map(|project| pick(project, &PROJECT_FIELDS))
        .collect()
}

/// Trim each issue to the fields a listing needs, preferring the expanded
/// `state_detail` / `priority_detail` when the API included them.
/// Responses without a `results` list pass through unchanged.
pub fn summarize_issues(response: &Value) -> Value {
    let Some(results) = results(response) else {
        return response.clone();
    };

    let issues: Vec<Value> = results
        .iter()
        .map(|issue| {
            let mut summary = Map::new();
            summary.insert("id".into(), field(issue, "id"));
            summary.insert("name".into(), field(issue, "name"));
            summary.insert("sequence_id".into(), field(issue, "sequence_id"));
            summary.insert("state".into(), detail_or(issue, "state_detail", "state"));
            summary.insert(
                "priority".into(),
                detail_or(issue, "priority_detail", "priority"),
            );
            summary.insert("created_at".into(), field(issue, "created_at"));
            summary.insert("updated_at".into(), field(issue, "updated_at"));
            Value::Object(summary)
        })
        .collect();

    let mut summary = Map::new();
    summary.insert("total_count".into(), field(response, "total_count"));
    summary.insert("count".into(), field(response, "count"));
    summary.insert("results".into(), Value::Array(issues));
    Value::Object(summary)
}

fn results(response: &Value) -> Option<&Vec<Value>> {
    response.get("results")?.as_array()
}

fn field(value: &Value, key: &str) -> Value {
    value.get(key).cloned().unwrap_or(Value::Null)
}

fn pick(value: &Value, keys: &[&str]) -> Value {
    Value::Object(
        keys.iter()
            .map(|key| (key.to_string(), field(value, key)))
            .collect(),
    )
}

fn detail_or(value: &Value, detail: &str, fallback: &str) -> Value {
    match value.get(detail) {
        Some(found) if !is_empty(found) => found.clone(),
        _ => field(value, fallback),
    }
}

/// Mirrors JSON "falsy": null, false, 0, "", [] and {}.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
