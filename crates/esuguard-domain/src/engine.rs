use crate::checks;
use crate::fingerprint;
use crate::model::EvaluationInput;
use crate::policy;
use crate::report::{EvaluationReport, SeverityCounts};
use esuguard_types::{EvaluationData, Finding, SafetyStatus, Severity};

/// Evaluate one set of operating parameters.
///
/// Pure and total: any well-typed input produces a report, equal inputs
/// produce equal reports, and no state survives the call. Findings stay in
/// check order (power, activation, impedance, return pad); the message
/// sequence is part of the caller contract.
pub fn evaluate(input: &EvaluationInput) -> EvaluationReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(input, &mut findings);

    let pediatric = input.is_pediatric();
    let mode = input.mode.as_str();
    for f in &mut findings {
        f.fingerprint = Some(fingerprint::fingerprint_for_finding(
            &f.check_id,
            &f.code,
            mode,
            pediatric,
        ));
    }

    let status = compute_status(&findings);
    let counts = SeverityCounts::from_findings(&findings);
    let limits = policy::power_limits(input);

    let data = EvaluationData {
        mode: mode.to_string(),
        pediatric,
        max_power_watts: limits.max_watts,
        recommended_power_watts: limits.recommended_watts,
        checks_run: checks::CHECK_COUNT,
        findings_total: findings.len() as u32,
    };

    EvaluationReport {
        status,
        findings,
        counts,
        data,
    }
}

fn compute_status(findings: &[Finding]) -> SafetyStatus {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return SafetyStatus::Error;
    }

    let has_warning = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warning {
        return SafetyStatus::Warning;
    }

    SafetyStatus::Safe
}
