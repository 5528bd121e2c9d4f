use crate::{RenderableReport, RenderableSeverity, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Esuguard report\n\n");
    let status = match report.status {
        RenderableStatus::Safe => "SAFE",
        RenderableStatus::Warning => "WARNING",
        RenderableStatus::Error => "ERROR",
    };
    out.push_str(&format!(
        "- Status: **{}**\n- Mode: {}{}\n- Power limits: {} W max / {} W recommended\n- Findings: {}\n\n",
        status,
        report.data.mode,
        if report.data.pediatric {
            " (pediatric derating applied)"
        } else {
            ""
        },
        report.data.max_power_watts,
        report.data.recommended_power_watts,
        report.data.findings_total
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}` — {}\n",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        ));

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
