use crate::model::EvaluationInput;
use crate::policy;
use esuguard_types::{ids, Finding, Severity};
use serde_json::json;

/// Power against the effective mode limits. Tiers are mutually exclusive;
/// the ceiling violation wins over the recommended-level one.
pub fn run(input: &EvaluationInput, out: &mut Vec<Finding>) {
    let limits = policy::power_limits(input);

    if input.power_watts > limits.max_watts {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_GENERATOR_POWER.to_string(),
            code: ids::CODE_POWER_EXCEEDS_MAX.to_string(),
            message: "Power exceeds maximum safe limit".to_string(),
            help: Some("Reduce the power setting below the mode maximum.".to_string()),
            fingerprint: None,
            data: json!({
                "power_watts": input.power_watts,
                "max_power_watts": limits.max_watts,
                "mode": input.mode.as_str(),
                "pediatric": input.is_pediatric(),
            }),
        });
    } else if input.power_watts > limits.recommended_watts {
        out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_GENERATOR_POWER.to_string(),
            code: ids::CODE_POWER_ABOVE_RECOMMENDED.to_string(),
            message: "Power above recommended level".to_string(),
            help: Some(
                "Start at or below the recommended level and titrate up only if needed."
                    .to_string(),
            ),
            fingerprint: None,
            data: json!({
                "power_watts": input.power_watts,
                "recommended_power_watts": limits.recommended_watts,
                "mode": input.mode.as_str(),
                "pediatric": input.is_pediatric(),
            }),
        });
    }
}
