use crate::error::InputError;
use crate::model::CaseFileV1;
use crate::presets;
use esuguard_domain::model::{EnergyMode, EvaluationInput, PadContact};

/// Field-level overrides, typically from CLI flags.
///
/// Precedence: override > case file > reference default.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub age_years: Option<u32>,
    pub weight_kg: Option<f64>,
    pub mode: Option<String>,
    pub power_watts: Option<f64>,
    pub activation_secs: Option<f64>,
    pub impedance_ohms: Option<f64>,
    pub pad_contact: Option<String>,
    pub rem_enabled: Option<bool>,
}

/// Resolve a case file plus overrides into one evaluator input.
///
/// Every rejection here is an [`InputError`]; inputs that resolve are
/// handed to the evaluator as-is, unguarded.
pub fn resolve_case(case: CaseFileV1, overrides: Overrides) -> Result<EvaluationInput, InputError> {
    let defaults = presets::default_case();

    let mode = match overrides.mode.or(case.generator.mode) {
        Some(token) => parse_mode(&token)?,
        None => defaults.mode,
    };

    let pad_contact = match overrides.pad_contact.or(case.circuit.pad_contact) {
        Some(token) => parse_pad_contact(&token)?,
        None => defaults.pad_contact,
    };

    let age_years = overrides
        .age_years
        .or(case.patient.age_years)
        .unwrap_or(defaults.age_years);
    let weight_kg = overrides
        .weight_kg
        .or(case.patient.weight_kg)
        .unwrap_or(defaults.weight_kg);
    let power_watts = overrides
        .power_watts
        .or(case.generator.power_watts)
        .unwrap_or(defaults.power_watts);
    let activation_secs = overrides
        .activation_secs
        .or(case.generator.activation_secs)
        .unwrap_or(defaults.activation_secs);
    let impedance_ohms = overrides
        .impedance_ohms
        .or(case.circuit.impedance_ohms)
        .unwrap_or(defaults.impedance_ohms);
    let rem_enabled = overrides
        .rem_enabled
        .or(case.circuit.rem_enabled)
        .unwrap_or(defaults.rem_enabled);

    require_positive("weight_kg", weight_kg)?;
    require_non_negative("power_watts", power_watts)?;
    require_non_negative("activation_secs", activation_secs)?;
    require_non_negative("impedance_ohms", impedance_ohms)?;

    Ok(EvaluationInput {
        age_years,
        weight_kg,
        mode,
        power_watts,
        activation_secs,
        impedance_ohms,
        pad_contact,
        rem_enabled,
    })
}

fn parse_mode(token: &str) -> Result<EnergyMode, InputError> {
    match token.to_ascii_lowercase().as_str() {
        "cut" => Ok(EnergyMode::Cut),
        "coag" => Ok(EnergyMode::Coag),
        _ => Err(InputError::UnknownMode(token.to_string())),
    }
}

fn parse_pad_contact(token: &str) -> Result<PadContact, InputError> {
    match token.to_ascii_lowercase().as_str() {
        "good" => Ok(PadContact::Good),
        "marginal" => Ok(PadContact::Marginal),
        "poor" => Ok(PadContact::Poor),
        _ => Err(InputError::UnknownPadContact(token.to_string())),
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::non_finite(field, value));
    }
    if value <= 0.0 {
        return Err(InputError::non_positive(field, value));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::non_finite(field, value));
    }
    if value < 0.0 {
        return Err(InputError::negative(field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_case_toml;

    #[test]
    fn empty_case_resolves_to_reference_defaults() {
        let input = resolve_case(CaseFileV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(input, presets::default_case());
    }

    #[test]
    fn case_file_wins_over_defaults() {
        let case = parse_case_toml(
            r#"
schema = "esuguard.case.v1"

[patient]
age_years = 6
weight_kg = 20.0

[generator]
mode = "coag"
power_watts = 45.0

[circuit]
pad_contact = "marginal"
"#,
        )
        .expect("parse");

        let input = resolve_case(case, Overrides::default()).expect("resolve");
        assert_eq!(input.age_years, 6);
        assert_eq!(input.mode, EnergyMode::Coag);
        assert_eq!(input.power_watts, 45.0);
        assert_eq!(input.pad_contact, PadContact::Marginal);
        // Untouched fields keep the defaults.
        assert_eq!(input.activation_secs, 5.0);
        assert_eq!(input.impedance_ohms, 120.0);
        assert!(input.rem_enabled);
    }

    #[test]
    fn overrides_win_over_case_file() {
        let case = parse_case_toml("[generator]\npower_watts = 45.0\nmode = \"coag\"\n")
            .expect("parse");

        let overrides = Overrides {
            power_watts: Some(95.0),
            mode: Some("cut".to_string()),
            ..Overrides::default()
        };

        let input = resolve_case(case, overrides).expect("resolve");
        assert_eq!(input.power_watts, 95.0);
        assert_eq!(input.mode, EnergyMode::Cut);
    }

    #[test]
    fn mode_and_pad_tokens_are_case_insensitive() {
        let overrides = Overrides {
            mode: Some("Coag".to_string()),
            pad_contact: Some("POOR".to_string()),
            ..Overrides::default()
        };

        let input = resolve_case(CaseFileV1::default(), overrides).expect("resolve");
        assert_eq!(input.mode, EnergyMode::Coag);
        assert_eq!(input.pad_contact, PadContact::Poor);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let overrides = Overrides {
            mode: Some("blend".to_string()),
            ..Overrides::default()
        };
        let err = resolve_case(CaseFileV1::default(), overrides).unwrap_err();
        assert_eq!(err, InputError::UnknownMode("blend".to_string()));

        let overrides = Overrides {
            pad_contact: Some("loose".to_string()),
            ..Overrides::default()
        };
        let err = resolve_case(CaseFileV1::default(), overrides).unwrap_err();
        assert_eq!(err, InputError::UnknownPadContact("loose".to_string()));
    }

    #[test]
    fn non_physical_magnitudes_are_rejected() {
        let overrides = Overrides {
            weight_kg: Some(0.0),
            ..Overrides::default()
        };
        let err = resolve_case(CaseFileV1::default(), overrides).unwrap_err();
        assert!(matches!(err, InputError::NonPhysical { field: "weight_kg", .. }));

        let overrides = Overrides {
            impedance_ohms: Some(-5.0),
            ..Overrides::default()
        };
        let err = resolve_case(CaseFileV1::default(), overrides).unwrap_err();
        assert!(matches!(err, InputError::NonPhysical { field: "impedance_ohms", .. }));

        let overrides = Overrides {
            power_watts: Some(f64::NAN),
            ..Overrides::default()
        };
        let err = resolve_case(CaseFileV1::default(), overrides).unwrap_err();
        assert!(matches!(err, InputError::NonPhysical { field: "power_watts", .. }));
    }

    #[test]
    fn malformed_toml_is_a_distinct_error() {
        let err = parse_case_toml("[generator\npower_watts = ").unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }
}
