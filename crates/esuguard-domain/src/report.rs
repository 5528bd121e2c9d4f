use esuguard_types::{EvaluationData, Finding, SafetyStatus, Severity};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Result of one evaluation: rolled-up status plus findings in check order.
#[derive(Clone, Debug)]
pub struct EvaluationReport {
    pub status: SafetyStatus,
    pub findings: Vec<Finding>,
    pub counts: SeverityCounts,
    pub data: EvaluationData,
}

impl EvaluationReport {
    /// Warning messages, in check order.
    pub fn warnings(&self) -> Vec<&str> {
        self.messages_with(Severity::Warning)
    }

    /// Error messages, in check order.
    pub fn errors(&self) -> Vec<&str> {
        self.messages_with(Severity::Error)
    }

    /// True iff the caller must not proceed with activation.
    pub fn is_blocking(&self) -> bool {
        self.status == SafetyStatus::Error
    }

    fn messages_with(&self, severity: Severity) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message.as_str())
            .collect()
    }
}
