use crate::{RenderableReport, RenderableSeverity, RenderableStatus};

/// Render the operator alert panel as plain lines.
///
/// Warnings come first, then errors, each prefixed the way the reference
/// console annotates them, followed by a status banner line.
pub fn render_console_lines(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        if f.severity == RenderableSeverity::Warning {
            out.push(format!("⚠ {}", f.message));
        }
    }
    for f in &report.findings {
        if f.severity == RenderableSeverity::Error {
            out.push(format!("⛔ {}", f.message));
        }
    }

    let banner = match report.status {
        RenderableStatus::Safe => "STATUS: SAFE",
        RenderableStatus::Warning => "STATUS: WARNING",
        RenderableStatus::Error => "STATUS: ERROR",
    };
    out.push(banner.to_string());

    out
}
