//! Use case orchestration for esuguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, domain, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;

pub use check::{run_evaluation, status_exit_code, EvaluateOutcome, EvaluateRequest};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{parse_report_json, serialize_report, to_renderable};
