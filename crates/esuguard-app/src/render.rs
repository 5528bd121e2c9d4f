//! Report (de)serialization and the renderable-model bridge.

use anyhow::Context;
use esuguard_render::RenderableReport;
use esuguard_types::SafetyReport;

/// Serialize a report to pretty-printed JSON with a trailing newline.
pub fn serialize_report(report: &SafetyReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

/// Parse a JSON report back into the envelope.
pub fn parse_report_json(text: &str) -> anyhow::Result<SafetyReport> {
    let report: SafetyReport = serde_json::from_str(text).context("parse report JSON")?;
    Ok(report)
}

/// Bridge the envelope to the renderer-facing model.
pub fn to_renderable(report: &SafetyReport) -> RenderableReport {
    RenderableReport::from_report(report)
}
