use crate::model::{EvaluationInput, PadContact};
use esuguard_types::{ids, Finding, Severity};
use serde_json::json;

/// Return-pad contact quality, interpreted through the monitoring state.
///
/// Poor contact with REM active means the generator interlocks: blocking
/// error. Poor contact without REM leaves the hazard unmonitored: warning
/// the operator must act on. Good and marginal contact pass.
pub fn run(input: &EvaluationInput, out: &mut Vec<Finding>) {
    if input.pad_contact != PadContact::Poor {
        return;
    }

    if input.rem_enabled {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_CIRCUIT_RETURN_PAD.to_string(),
            code: ids::CODE_REM_POOR_CONTACT.to_string(),
            message: "REM detected poor return pad contact".to_string(),
            help: Some(
                "Reapply the return pad with full-surface contact and verify the REM indicator clears."
                    .to_string(),
            ),
            fingerprint: None,
            data: json!({
                "pad_contact": input.pad_contact.as_str(),
                "rem_enabled": true,
            }),
        });
    } else {
        out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_CIRCUIT_RETURN_PAD.to_string(),
            code: ids::CODE_POOR_CONTACT_UNMONITORED.to_string(),
            message: "Poor return pad contact – burn risk".to_string(),
            help: Some(
                "Reapply the return pad before proceeding, and enable REM if supported."
                    .to_string(),
            ),
            fingerprint: None,
            data: json!({
                "pad_contact": input.pad_contact.as_str(),
                "rem_enabled": false,
            }),
        });
    }
}
