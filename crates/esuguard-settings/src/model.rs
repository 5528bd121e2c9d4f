use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Case file schema v1.
///
/// This is a *user-facing* model: every field is optional so partial case
/// files compose with the reference defaults and CLI overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaseFileV1 {
    /// Optional schema string for tooling (`esuguard.case.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub patient: PatientSection,

    #[serde(default)]
    pub generator: GeneratorSection,

    #[serde(default)]
    pub circuit: CircuitSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatientSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratorSection {
    /// Energy mode token: `cut` or `coag` (case-insensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_watts: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_secs: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CircuitSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impedance_ohms: Option<f64>,

    /// Pad contact token: `good`, `marginal`, or `poor` (case-insensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rem_enabled: Option<bool>,
}
