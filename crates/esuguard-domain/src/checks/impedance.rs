use crate::model::EvaluationInput;
use crate::policy;
use esuguard_types::{ids, Finding, Severity};
use serde_json::json;

/// Electrode-circuit impedance plausibility.
pub fn run(input: &EvaluationInput, out: &mut Vec<Finding>) {
    if input.impedance_ohms > policy::IMPEDANCE_MAX_OHMS {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_CIRCUIT_IMPEDANCE.to_string(),
            code: ids::CODE_IMPEDANCE_VERY_HIGH.to_string(),
            message: "Very high impedance (unsafe)".to_string(),
            help: Some(
                "Inspect and clean the active electrode, reseat cables, and re-measure."
                    .to_string(),
            ),
            fingerprint: None,
            data: json!({
                "impedance_ohms": input.impedance_ohms,
                "max_ohms": policy::IMPEDANCE_MAX_OHMS,
            }),
        });
    } else if input.impedance_ohms > policy::IMPEDANCE_HIGH_OHMS {
        out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_CIRCUIT_IMPEDANCE.to_string(),
            code: ids::CODE_IMPEDANCE_HIGH.to_string(),
            message: "High impedance".to_string(),
            help: Some("Check for eschar buildup and loose connections.".to_string()),
            fingerprint: None,
            data: json!({
                "impedance_ohms": input.impedance_ohms,
                "high_ohms": policy::IMPEDANCE_HIGH_OHMS,
            }),
        });
    }
}
