//! Case parsing and input resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves the
//! evaluation input provided as strings, and owns the invalid-input error
//! taxonomy. Anything it rejects never reaches the evaluator.

#![forbid(unsafe_code)]

mod error;
mod model;
mod presets;
mod resolve;

pub use error::InputError;
pub use model::{CaseFileV1, CircuitSection, GeneratorSection, PatientSection};
pub use presets::default_case;
pub use resolve::{resolve_case, Overrides};

/// Parse a case file (TOML) into a typed model.
pub fn parse_case_toml(input: &str) -> Result<CaseFileV1, InputError> {
    let case: CaseFileV1 =
        toml::from_str(input).map_err(|e| InputError::Malformed(e.to_string()))?;
    Ok(case)
}
