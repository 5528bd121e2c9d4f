//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to clear the finding before activating the generator.
    pub remediation: &'static str,
    /// Before/after case-file examples.
    pub examples: CaseExamplePair,
}

/// Before and after case-file examples.
#[derive(Debug, Clone)]
pub struct CaseExamplePair {
    /// A case that would trigger a finding.
    pub before: &'static str,
    /// A case that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_GENERATOR_POWER => Some(explain_power()),
        ids::CHECK_GENERATOR_ACTIVATION => Some(explain_activation()),
        ids::CHECK_CIRCUIT_IMPEDANCE => Some(explain_impedance()),
        ids::CHECK_CIRCUIT_RETURN_PAD => Some(explain_return_pad()),

        // Codes
        ids::CODE_POWER_EXCEEDS_MAX => Some(explain_power_exceeds_max()),
        ids::CODE_POWER_ABOVE_RECOMMENDED => Some(explain_power_above_recommended()),
        ids::CODE_ACTIVATION_TOO_LONG => Some(explain_activation_too_long()),
        ids::CODE_ACTIVATION_LONG => Some(explain_activation_long()),
        ids::CODE_IMPEDANCE_VERY_HIGH => Some(explain_impedance_very_high()),
        ids::CODE_IMPEDANCE_HIGH => Some(explain_impedance_high()),
        ids::CODE_REM_POOR_CONTACT => Some(explain_rem_poor_contact()),
        ids::CODE_POOR_CONTACT_UNMONITORED => Some(explain_poor_contact_unmonitored()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_GENERATOR_POWER,
        ids::CHECK_GENERATOR_ACTIVATION,
        ids::CHECK_CIRCUIT_IMPEDANCE,
        ids::CHECK_CIRCUIT_RETURN_PAD,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_POWER_EXCEEDS_MAX,
        ids::CODE_POWER_ABOVE_RECOMMENDED,
        ids::CODE_ACTIVATION_TOO_LONG,
        ids::CODE_ACTIVATION_LONG,
        ids::CODE_IMPEDANCE_VERY_HIGH,
        ids::CODE_IMPEDANCE_HIGH,
        ids::CODE_REM_POOR_CONTACT,
        ids::CODE_POOR_CONTACT_UNMONITORED,
    ]
}

// --- Check-level explanations ---

fn explain_power() -> Explanation {
    Explanation {
        title: "Power Within Mode Limits",
        description: "\
Compares the requested output power against the limits for the selected
energy mode (Cut: 120 W max / 80 W recommended; Coag: 90 W max / 60 W
recommended). For pediatric patients both limits are derated to 70%.

Excess power increases the risk of unintended thermal spread and deep
tissue damage beyond the visible effect at the active electrode.",
        remediation: "\
Lower the power setting below the mode maximum, or switch to the mode
whose limits match the intended effect. Verify the patient profile:
pediatric derating applies under 8 years, and up to 12 years below 40 kg.",
        examples: CaseExamplePair {
            before: r#"[generator]
mode = "coag"
power_watts = 95.0"#,
            after: r#"[generator]
mode = "coag"
power_watts = 55.0"#,
        },
    }
}

fn explain_activation() -> Explanation {
    Explanation {
        title: "Activation Time Bounded",
        description: "\
Flags continuous activation longer than 10 seconds and blocks activation
longer than 20 seconds.

Prolonged continuous activation accumulates heat faster than perfusion can
carry it away, which is the dominant mechanism of inadvertent thermal
injury at both the active electrode and the return pad.",
        remediation: "\
Use short, intermittent activations and allow tissue to cool between them.
If longer application is clinically required, reduce power and re-evaluate.",
        examples: CaseExamplePair {
            before: r#"[generator]
activation_secs = 25.0"#,
            after: r#"[generator]
activation_secs = 5.0"#,
        },
    }
}

fn explain_impedance() -> Explanation {
    Explanation {
        title: "Circuit Impedance Plausible",
        description: "\
Flags electrode-circuit impedance above 200 Ω and blocks above 300 Ω.

High impedance usually means a degraded current path: eschar buildup on the
electrode, desiccated tissue, or a failing cable connection. Driving power
into a high-impedance path produces unpredictable tissue effect and arcing.",
        remediation: "\
Clean the active electrode, check cable connections, and re-measure. If
impedance stays high, replace the electrode or cable before proceeding.",
        examples: CaseExamplePair {
            before: r#"[circuit]
impedance_ohms = 350.0"#,
            after: r#"[circuit]
impedance_ohms = 120.0"#,
        },
    }
}

fn explain_return_pad() -> Explanation {
    Explanation {
        title: "Return Pad Contact Quality",
        description: "\
Evaluates dispersive (return) electrode contact. Poor contact concentrates
the return current through a small skin area, which is the classic cause of
pad-site burns.

With Return Electrode Monitoring (REM) enabled the generator interlocks on
poor contact, so the finding blocks. Without REM the hazard is unmonitored
and is surfaced as a warning the operator must act on.",
        remediation: "\
Reapply the return pad on a clean, dry, well-perfused muscle mass; check
for gel dry-out and full-surface adhesion. Prefer REM-capable pads so the
generator can interlock on contact loss.",
        examples: CaseExamplePair {
            before: r#"[circuit]
pad_contact = "poor"
rem_enabled = true"#,
            after: r#"[circuit]
pad_contact = "good"
rem_enabled = true"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_power_exceeds_max() -> Explanation {
    Explanation {
        title: "Power Exceeds Maximum Safe Limit",
        description: "\
The requested power is above the hard ceiling for the selected mode
(after pediatric derating, if applicable). Activation is blocked.",
        remediation: "\
Reduce the power setting below the mode maximum. For pediatric patients
the ceiling is 70% of the adult limit.",
        examples: CaseExamplePair {
            before: r#"[generator]
mode = "cut"
power_watts = 130.0"#,
            after: r#"[generator]
mode = "cut"
power_watts = 80.0"#,
        },
    }
}

fn explain_power_above_recommended() -> Explanation {
    Explanation {
        title: "Power Above Recommended Level",
        description: "\
The requested power is within the hard ceiling but above the recommended
level for the selected mode. Proceeding is allowed but should be deliberate.",
        remediation: "\
Use the lowest power that achieves the desired tissue effect; start at or
below the recommended level and titrate up only if needed.",
        examples: CaseExamplePair {
            before: r#"[generator]
mode = "cut"
power_watts = 100.0"#,
            after: r#"[generator]
mode = "cut"
power_watts = 70.0"#,
        },
    }
}

fn explain_activation_too_long() -> Explanation {
    Explanation {
        title: "Activation Time Too Long",
        description: "\
Continuous activation beyond 20 seconds carries a direct thermal injury
risk. Activation is blocked.",
        remediation: "Break the application into shorter activations with cooling pauses.",
        examples: CaseExamplePair {
            before: r#"[generator]
activation_secs = 30.0"#,
            after: r#"[generator]
activation_secs = 8.0"#,
        },
    }
}

fn explain_activation_long() -> Explanation {
    Explanation {
        title: "Long Activation Time",
        description: "\
Continuous activation beyond 10 seconds is flagged so the operator can
reconsider technique before heat accumulates.",
        remediation: "Prefer several short activations over one long one.",
        examples: CaseExamplePair {
            before: r#"[generator]
activation_secs = 14.0"#,
            after: r#"[generator]
activation_secs = 6.0"#,
        },
    }
}

fn explain_impedance_very_high() -> Explanation {
    Explanation {
        title: "Very High Impedance",
        description: "\
Circuit impedance above 300 Ω indicates a compromised current path.
Activation is blocked.",
        remediation: "\
Inspect and clean the active electrode, reseat cables, and re-measure
before activating.",
        examples: CaseExamplePair {
            before: r#"[circuit]
impedance_ohms = 420.0"#,
            after: r#"[circuit]
impedance_ohms = 150.0"#,
        },
    }
}

fn explain_impedance_high() -> Explanation {
    Explanation {
        title: "High Impedance",
        description: "\
Circuit impedance above 200 Ω is flagged: tissue effect becomes less
predictable as the path degrades.",
        remediation: "Check for eschar buildup and loose connections.",
        examples: CaseExamplePair {
            before: r#"[circuit]
impedance_ohms = 240.0"#,
            after: r#"[circuit]
impedance_ohms = 120.0"#,
        },
    }
}

fn explain_rem_poor_contact() -> Explanation {
    Explanation {
        title: "REM Detected Poor Return Pad Contact",
        description: "\
Return Electrode Monitoring measured poor pad contact. The monitoring
system interlocks output until contact is restored.",
        remediation: "\
Reapply the return pad to a clean, dry site with full-surface contact and
verify the REM indicator clears.",
        examples: CaseExamplePair {
            before: r#"[circuit]
pad_contact = "poor"
rem_enabled = true"#,
            after: r#"[circuit]
pad_contact = "good"
rem_enabled = true"#,
        },
    }
}

fn explain_poor_contact_unmonitored() -> Explanation {
    Explanation {
        title: "Poor Return Pad Contact Without REM",
        description: "\
Pad contact is poor and no monitoring system is active, so nothing will
interlock output if contact degrades further. This is the highest-risk
configuration for pad-site burns that still permits activation.",
        remediation: "\
Reapply the return pad before proceeding, and enable REM if the generator
and pad support it.",
        examples: CaseExamplePair {
            before: r#"[circuit]
pad_contact = "poor"
rem_enabled = false"#,
            after: r#"[circuit]
pad_contact = "good"
rem_enabled = true"#,
        },
    }
}
