use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for esuguard reports.
pub const SCHEMA_REPORT_V1: &str = "esuguard.report.v1";

/// Severity is intentionally small: warnings display, errors block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Rolled-up verdict for one evaluation.
///
/// `Error` iff any error finding was emitted; `Warning` iff there are
/// warning findings but no errors; `Safe` iff there are no findings at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending. A hash of:
    /// `check_id + code + salient input fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Esuguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct EvaluationData {
    /// Selected energy mode ("cut" or "coag").
    pub mode: String,
    /// Whether pediatric derating was applied.
    pub pediatric: bool,

    /// Effective power ceiling after derating, watts.
    pub max_power_watts: f64,
    /// Effective recommended power after derating, watts.
    pub recommended_power_watts: f64,

    pub checks_run: u32,
    pub findings_total: u32,
}

/// The emitted report envelope.
///
/// Keeping this generic allows esuguard to embed evaluation-specific data
/// while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = EvaluationData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: SafetyStatus,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type SafetyReport = ReportEnvelope<EvaluationData>;
