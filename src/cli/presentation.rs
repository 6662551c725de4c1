//! Presentation: report, roles, resolution and discovery rendering (text/json).

use crate::error::ApiError;
use crate::registry::{EntityKind, RoleRegistry};
use crate::report::GradingReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

fn section_title(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

pub fn format_report_text(report: &GradingReport, color: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Check", "", "Details"]);
    for outcome in &report.outcomes {
        let mark = if outcome.passed { "✓" } else { "✗" };
        table.add_row(vec![outcome.subject.as_str(), mark, outcome.message.as_str()]);
    }

    let summary = format!(
        "{}/{} checks passed",
        report.passed(),
        report.outcomes.len()
    );
    let summary = match (color, report.is_success()) {
        (false, _) => summary,
        (true, true) => summary.green().to_string(),
        (true, false) => summary.red().to_string(),
    };

    format!(
        "{}\n\n{}\n\n{}",
        section_title("Model check", color),
        table,
        summary
    )
}

pub fn format_report_json(report: &GradingReport) -> Result<String, ApiError> {
    let out = json!({
        "generated_at": report.generated_at,
        "passed": report.passed(),
        "failed": report.failed(),
        "outcomes": report.outcomes,
    });
    serde_json::to_string_pretty(&out).map_err(|e| ApiError::Output(e.to_string()))
}

pub fn format_roles_text(registry: &RoleRegistry) -> String {
    let mut output = format!("Entity: {}\n", registry.entity());
    let passthrough: Vec<&str> = registry.passthrough().iter().map(String::as_str).collect();
    output.push_str(&format!("Literal names: {}\n", passthrough.join(", ")));

    if registry.roles().is_empty() {
        output.push_str("\nNo structural roles.");
        return output;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Role", "Expected field", "Purpose"]);
    for role in registry.roles() {
        table.add_row(vec![
            role.name.clone(),
            role.signature.to_string(),
            role.description.clone(),
        ]);
    }
    output.push('\n');
    output.push_str(&table.to_string());
    output
}

pub fn format_roles_json(registry: &RoleRegistry) -> Result<String, ApiError> {
    let out = json!({
        "entity": registry.entity(),
        "passthrough": registry.passthrough(),
        "roles": registry.roles(),
    });
    serde_json::to_string_pretty(&out).map_err(|e| ApiError::Output(e.to_string()))
}

pub fn format_resolution_text(entity: EntityKind, role: &str, model: &str, field: &str) -> String {
    format!("{entity}.{role} -> {model}.{field}")
}

/// One line per entity: the model standing for it, or why none does
pub fn format_discovery_text(found: &[(EntityKind, Result<String, String>)]) -> String {
    found
        .iter()
        .map(|(entity, result)| match result {
            Ok(model) => format!("{:<8} {}", entity.as_str(), model),
            Err(reason) => format!("{:<8} missing: {}", entity.as_str(), reason),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
