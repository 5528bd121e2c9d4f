//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_GENERATOR_POWER: &str = "generator.power";
pub const CHECK_GENERATOR_ACTIVATION: &str = "generator.activation";
pub const CHECK_CIRCUIT_IMPEDANCE: &str = "circuit.impedance";
pub const CHECK_CIRCUIT_RETURN_PAD: &str = "circuit.return_pad";

// Codes: generator.power
pub const CODE_POWER_EXCEEDS_MAX: &str = "power_exceeds_max";
pub const CODE_POWER_ABOVE_RECOMMENDED: &str = "power_above_recommended";

// Codes: generator.activation
pub const CODE_ACTIVATION_TOO_LONG: &str = "activation_too_long";
pub const CODE_ACTIVATION_LONG: &str = "activation_long";

// Codes: circuit.impedance
pub const CODE_IMPEDANCE_VERY_HIGH: &str = "impedance_very_high";
pub const CODE_IMPEDANCE_HIGH: &str = "impedance_high";

// Codes: circuit.return_pad
pub const CODE_REM_POOR_CONTACT: &str = "rem_poor_contact";
pub const CODE_POOR_CONTACT_UNMONITORED: &str = "poor_contact_unmonitored";
