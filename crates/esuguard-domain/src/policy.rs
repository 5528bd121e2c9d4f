//! Threshold tables for the safety checks.
//!
//! All comparisons downstream are strictly greater-than: the threshold
//! value itself still passes.

use crate::model::{EnergyMode, EvaluationInput};

/// Hard ceiling and recommended level for output power, watts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerLimits {
    pub max_watts: f64,
    pub recommended_watts: f64,
}

pub const CUT_LIMITS: PowerLimits = PowerLimits {
    max_watts: 120.0,
    recommended_watts: 80.0,
};

pub const COAG_LIMITS: PowerLimits = PowerLimits {
    max_watts: 90.0,
    recommended_watts: 60.0,
};

/// Both power limits are multiplied by this factor for pediatric patients.
pub const PEDIATRIC_DERATING: f64 = 0.7;

/// Continuous activation above this blocks (thermal injury risk), seconds.
pub const ACTIVATION_MAX_SECS: f64 = 20.0;
/// Continuous activation above this is flagged, seconds.
pub const ACTIVATION_LONG_SECS: f64 = 10.0;

/// Circuit impedance above this blocks, ohms.
pub const IMPEDANCE_MAX_OHMS: f64 = 300.0;
/// Circuit impedance above this is flagged, ohms.
pub const IMPEDANCE_HIGH_OHMS: f64 = 200.0;

impl PowerLimits {
    fn derated(self, factor: f64) -> PowerLimits {
        PowerLimits {
            max_watts: self.max_watts * factor,
            recommended_watts: self.recommended_watts * factor,
        }
    }
}

/// Effective power limits for one evaluation: mode table first, then
/// pediatric derating.
pub fn power_limits(input: &EvaluationInput) -> PowerLimits {
    let base = match input.mode {
        EnergyMode::Cut => CUT_LIMITS,
        EnergyMode::Coag => COAG_LIMITS,
    };

    if input.is_pediatric() {
        base.derated(PEDIATRIC_DERATING)
    } else {
        base
    }
}
