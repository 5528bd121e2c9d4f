use crate::model::{EnergyMode, EvaluationInput, PadContact};

/// Adult baseline that evaluates clean: 70 kg, 30 years, Cut at 50 W,
/// 5 s activation, 120 Ω, good pad contact, REM enabled.
pub fn baseline() -> EvaluationInput {
    EvaluationInput {
        age_years: 30,
        weight_kg: 70.0,
        mode: EnergyMode::Cut,
        power_watts: 50.0,
        activation_secs: 5.0,
        impedance_ohms: 120.0,
        pad_contact: PadContact::Good,
        rem_enabled: true,
    }
}

/// Pediatric variant of the baseline (6 years, 20 kg), otherwise clean.
pub fn pediatric_baseline() -> EvaluationInput {
    EvaluationInput {
        age_years: 6,
        weight_kg: 20.0,
        ..baseline()
    }
}
