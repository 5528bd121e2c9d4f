use esuguard_types::{SafetyReport, SafetyStatus, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Safe,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableData {
    pub mode: String,
    pub pediatric: bool,
    pub max_power_watts: f64,
    pub recommended_power_watts: f64,
    pub findings_total: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub status: RenderableStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

impl RenderableReport {
    /// Decouple rendering from the emitted report envelope.
    pub fn from_report(report: &SafetyReport) -> Self {
        RenderableReport {
            status: match report.status {
                SafetyStatus::Safe => RenderableStatus::Safe,
                SafetyStatus::Warning => RenderableStatus::Warning,
                SafetyStatus::Error => RenderableStatus::Error,
            },
            findings: report
                .findings
                .iter()
                .map(|f| RenderableFinding {
                    severity: match f.severity {
                        Severity::Warning => RenderableSeverity::Warning,
                        Severity::Error => RenderableSeverity::Error,
                    },
                    check_id: Some(f.check_id.clone()),
                    code: f.code.clone(),
                    message: f.message.clone(),
                    help: f.help.clone(),
                })
                .collect(),
            data: RenderableData {
                mode: report.data.mode.clone(),
                pediatric: report.data.pediatric,
                max_power_watts: report.data.max_power_watts,
                recommended_power_watts: report.data.recommended_power_watts,
                findings_total: report.data.findings_total,
            },
        }
    }
}
