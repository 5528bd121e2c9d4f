//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Status rollup consistency
//! - Determinism and totality of the evaluator
//! - Per-category finding exclusivity
//! - Pediatric derating

use crate::engine::evaluate;
use crate::model::{EnergyMode, EvaluationInput, PadContact};
use crate::policy;
use esuguard_types::SafetyStatus;
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_mode() -> impl Strategy<Value = EnergyMode> {
    prop_oneof![Just(EnergyMode::Cut), Just(EnergyMode::Coag)]
}

fn arb_pad_contact() -> impl Strategy<Value = PadContact> {
    prop_oneof![
        Just(PadContact::Good),
        Just(PadContact::Marginal),
        Just(PadContact::Poor),
    ]
}

/// Clinically plausible inputs.
fn arb_input() -> impl Strategy<Value = EvaluationInput> {
    (
        0u32..120,
        1.0f64..250.0,
        arb_mode(),
        0.0f64..300.0,
        0.0f64..60.0,
        0.0f64..600.0,
        arb_pad_contact(),
        any::<bool>(),
    )
        .prop_map(
            |(age_years, weight_kg, mode, power_watts, activation_secs, impedance_ohms, pad_contact, rem_enabled)| {
                EvaluationInput {
                    age_years,
                    weight_kg,
                    mode,
                    power_watts,
                    activation_secs,
                    impedance_ohms,
                    pad_contact,
                    rem_enabled,
                }
            },
        )
}

/// Out-of-domain magnitudes the evaluator must still swallow: the caller
/// layer rejects these, but the evaluator itself stays total.
fn arb_hostile_input() -> impl Strategy<Value = EvaluationInput> {
    (
        any::<u32>(),
        -1e9f64..1e9,
        arb_mode(),
        -1e9f64..1e9,
        -1e9f64..1e9,
        -1e9f64..1e9,
        arb_pad_contact(),
        any::<bool>(),
    )
        .prop_map(
            |(age_years, weight_kg, mode, power_watts, activation_secs, impedance_ohms, pad_contact, rem_enabled)| {
                EvaluationInput {
                    age_years,
                    weight_kg,
                    mode,
                    power_watts,
                    activation_secs,
                    impedance_ohms,
                    pad_contact,
                    rem_enabled,
                }
            },
        )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Status is ERROR iff errors exist, WARNING iff warnings but no
    /// errors, SAFE iff no findings at all.
    #[test]
    fn status_rollup_is_consistent(input in arb_input()) {
        let report = evaluate(&input);

        let errors = report.errors().len();
        let warnings = report.warnings().len();

        match report.status {
            SafetyStatus::Error => prop_assert!(errors > 0),
            SafetyStatus::Warning => {
                prop_assert_eq!(errors, 0);
                prop_assert!(warnings > 0);
            }
            SafetyStatus::Safe => {
                prop_assert_eq!(errors, 0);
                prop_assert_eq!(warnings, 0);
            }
        }

        prop_assert_eq!(errors + warnings, report.findings.len());
        prop_assert_eq!(report.counts.error as usize, errors);
        prop_assert_eq!(report.counts.warning as usize, warnings);
    }

    /// Equal inputs produce equal reports.
    #[test]
    fn evaluation_is_deterministic(input in arb_input()) {
        let first = evaluate(&input);
        let second = evaluate(&input);

        prop_assert_eq!(first.status, second.status);
        prop_assert_eq!(first.findings, second.findings);
    }

    /// Each check category contributes at most one finding.
    #[test]
    fn at_most_one_finding_per_category(input in arb_hostile_input()) {
        let report = evaluate(&input);

        let mut per_check: BTreeMap<&str, usize> = BTreeMap::new();
        for f in &report.findings {
            *per_check.entry(f.check_id.as_str()).or_default() += 1;
        }

        for (check_id, count) in per_check {
            prop_assert_eq!(count, 1, "check {} emitted {} findings", check_id, count);
        }
    }

    /// The evaluator never panics, whatever the magnitudes.
    #[test]
    fn evaluator_is_total(input in arb_hostile_input()) {
        let report = evaluate(&input);
        prop_assert!(report.findings.len() <= 4);
    }

    /// Pediatric derating scales both effective power limits by exactly 0.7.
    #[test]
    fn pediatric_derating_scales_limits(input in arb_input()) {
        let report = evaluate(&input);

        let base = match input.mode {
            EnergyMode::Cut => policy::CUT_LIMITS,
            EnergyMode::Coag => policy::COAG_LIMITS,
        };

        if input.is_pediatric() {
            prop_assert_eq!(report.data.max_power_watts, base.max_watts * policy::PEDIATRIC_DERATING);
            prop_assert_eq!(
                report.data.recommended_power_watts,
                base.recommended_watts * policy::PEDIATRIC_DERATING
            );
        } else {
            prop_assert_eq!(report.data.max_power_watts, base.max_watts);
            prop_assert_eq!(report.data.recommended_power_watts, base.recommended_watts);
        }
    }

    /// Raising only the power never lowers the rolled-up status.
    #[test]
    fn more_power_never_improves_status(input in arb_input(), extra in 0.0f64..200.0) {
        fn rank(status: SafetyStatus) -> u8 {
            match status {
                SafetyStatus::Safe => 0,
                SafetyStatus::Warning => 1,
                SafetyStatus::Error => 2,
            }
        }

        let base = evaluate(&input);

        let mut raised = input;
        raised.power_watts += extra;
        let after = evaluate(&raised);

        prop_assert!(rank(after.status) >= rank(base.status));
    }
}
