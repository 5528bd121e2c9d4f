//! The `check` use case: resolve a case and produce a report envelope.

use esuguard_domain::model::EvaluationInput;
use esuguard_settings::{CaseFileV1, InputError, Overrides};
use esuguard_types::{SafetyReport, SafetyStatus, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the evaluation use case.
#[derive(Clone, Debug)]
pub struct EvaluateRequest<'a> {
    /// Case file contents (empty string if not provided).
    pub case_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the evaluation use case.
#[derive(Clone, Debug)]
pub struct EvaluateOutcome {
    /// The generated report.
    pub report: SafetyReport,
    /// The fully resolved input the evaluator saw.
    pub input: EvaluationInput,
}

/// Run the evaluation use case: parse the case, resolve overrides,
/// evaluate, wrap in the report envelope.
///
/// An [`InputError`] means the input never reached the evaluator; callers
/// must surface it as its own outcome, not as a safety verdict.
pub fn run_evaluation(request: EvaluateRequest<'_>) -> Result<EvaluateOutcome, InputError> {
    let started_at = OffsetDateTime::now_utc();

    let case = if request.case_text.trim().is_empty() {
        CaseFileV1::default()
    } else {
        esuguard_settings::parse_case_toml(request.case_text)?
    };

    let input = esuguard_settings::resolve_case(case, request.overrides)?;

    let domain_report = esuguard_domain::evaluate(&input);
    let finished_at = OffsetDateTime::now_utc();

    let report = SafetyReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "esuguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        status: domain_report.status,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(EvaluateOutcome { report, input })
}

/// Map status to exit code: 0 = safe/warning, 2 = error (blocking).
pub fn status_exit_code(status: SafetyStatus) -> i32 {
    match status {
        SafetyStatus::Safe => 0,
        SafetyStatus::Warning => 0,
        SafetyStatus::Error => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_case_text_uses_reference_defaults() {
        let outcome = run_evaluation(EvaluateRequest {
            case_text: "",
            overrides: Overrides::default(),
        })
        .expect("run_evaluation");

        assert_eq!(outcome.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(outcome.report.status, SafetyStatus::Safe);
        assert!(outcome.report.findings.is_empty());
        assert_eq!(outcome.input.power_watts, 50.0);
    }

    #[test]
    fn case_text_and_overrides_flow_through() {
        let case_text = "[generator]\nmode = \"coag\"\npower_watts = 65.0\n";
        let overrides = Overrides {
            activation_secs: Some(25.0),
            ..Overrides::default()
        };

        let outcome = run_evaluation(EvaluateRequest {
            case_text,
            overrides,
        })
        .expect("run_evaluation");

        // 65 W is above the coag recommended level, 25 s blocks.
        assert_eq!(outcome.report.status, SafetyStatus::Error);
        let codes: Vec<&str> = outcome
            .report
            .findings
            .iter()
            .map(|f| f.code.as_str())
            .collect();
        assert_eq!(codes, vec!["power_above_recommended", "activation_too_long"]);
    }

    #[test]
    fn invalid_input_is_a_typed_rejection() {
        let err = run_evaluation(EvaluateRequest {
            case_text: "[generator]\nmode = \"blend\"\n",
            overrides: Overrides::default(),
        })
        .unwrap_err();

        assert_eq!(err, InputError::UnknownMode("blend".to_string()));
    }

    #[test]
    fn status_exit_codes() {
        assert_eq!(status_exit_code(SafetyStatus::Safe), 0);
        assert_eq!(status_exit_code(SafetyStatus::Warning), 0);
        assert_eq!(status_exit_code(SafetyStatus::Error), 2);
    }
}
