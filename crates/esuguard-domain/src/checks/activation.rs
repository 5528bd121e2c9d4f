use crate::model::EvaluationInput;
use crate::policy;
use esuguard_types::{ids, Finding, Severity};
use serde_json::json;

/// Continuous activation time against the thermal-injury thresholds.
pub fn run(input: &EvaluationInput, out: &mut Vec<Finding>) {
    if input.activation_secs > policy::ACTIVATION_MAX_SECS {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_GENERATOR_ACTIVATION.to_string(),
            code: ids::CODE_ACTIVATION_TOO_LONG.to_string(),
            message: "Activation time too long (thermal injury risk)".to_string(),
            help: Some(
                "Break the application into shorter activations with cooling pauses.".to_string(),
            ),
            fingerprint: None,
            data: json!({
                "activation_secs": input.activation_secs,
                "max_secs": policy::ACTIVATION_MAX_SECS,
            }),
        });
    } else if input.activation_secs > policy::ACTIVATION_LONG_SECS {
        out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_GENERATOR_ACTIVATION.to_string(),
            code: ids::CODE_ACTIVATION_LONG.to_string(),
            message: "Long activation time".to_string(),
            help: Some("Prefer several short activations over one long one.".to_string()),
            fingerprint: None,
            data: json!({
                "activation_secs": input.activation_secs,
                "long_secs": policy::ACTIVATION_LONG_SECS,
            }),
        });
    }
}
