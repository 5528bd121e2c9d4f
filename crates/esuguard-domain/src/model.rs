/// Selected energy delivery mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnergyMode {
    Cut,
    Coag,
}

impl EnergyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EnergyMode::Cut => "cut",
            EnergyMode::Coag => "coag",
        }
    }
}

/// Measured contact quality of the dispersive (return) electrode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadContact {
    Good,
    Marginal,
    Poor,
}

impl PadContact {
    pub fn as_str(self) -> &'static str {
        match self {
            PadContact::Good => "good",
            PadContact::Marginal => "marginal",
            PadContact::Poor => "poor",
        }
    }
}

/// One evaluation's worth of operating parameters.
///
/// Value type, built fresh per call; nothing is retained between evaluations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationInput {
    pub age_years: u32,
    pub weight_kg: f64,
    pub mode: EnergyMode,
    pub power_watts: f64,
    pub activation_secs: f64,
    pub impedance_ohms: f64,
    pub pad_contact: PadContact,
    pub rem_enabled: bool,
}

impl EvaluationInput {
    /// Pediatric derating applies under 8 years, and through 12 years for
    /// patients under 40 kg.
    ///
    /// Derived per evaluation, never stored.
    pub fn is_pediatric(&self) -> bool {
        self.age_years < 8 || (self.age_years <= 12 && self.weight_kg < 40.0)
    }
}
