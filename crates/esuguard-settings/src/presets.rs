use esuguard_domain::model::{EnergyMode, EvaluationInput, PadContact};

/// The reference default case: an adult at conservative settings.
///
/// These are caller conventions, not evaluator invariants; they exist so a
/// bare `esuguard check` (and every reset in the operator console) starts
/// from a known-safe configuration.
pub fn default_case() -> EvaluationInput {
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
