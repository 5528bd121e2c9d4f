use crate::model::EvaluationInput;
use esuguard_types::Finding;

mod activation;
mod impedance;
mod power;
mod return_pad;


/// Number of check categories; each contributes at most one finding.
pub const CHECK_COUNT: u32 = 4;

/// Run every check category, in the fixed clinical order.
///
/// Categories are independent: all of them run even when an earlier one
/// already produced an error, and the resulting finding order is this
/// call order.
pub fn run_all(input: &EvaluationInput, out: &mut Vec<Finding>) {
    power::run(input, out);
    activation::run(input, out);
    impedance::run(input, out);
    return_pad::run(input, out);
}
