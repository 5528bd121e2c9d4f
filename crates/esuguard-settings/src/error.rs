use thiserror::Error;

/// Invalid-input taxonomy.
///
/// These are caller-side rejections: anything that produces an
/// `InputError` is never evaluated, and the outcome is distinct from a
/// safety verdict.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The case file is not valid TOML or has the wrong shape.
    #[error("malformed case file: {0}")]
    Malformed(String),

    /// The energy mode token is not recognized.
    #[error("unknown energy mode: {0:?} (expected 'cut' or 'coag')")]
    UnknownMode(String),

    /// The pad contact token is not recognized.
    #[error("unknown pad contact: {0:?} (expected 'good', 'marginal', or 'poor')")]
    UnknownPadContact(String),

    /// A magnitude is physically impossible.
    #[error("{field} must be {requirement}, got {value}")]
    NonPhysical {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

impl InputError {
    pub(crate) fn non_positive(field: &'static str, value: f64) -> Self {
        InputError::NonPhysical {
            field,
            requirement: "positive",
            value,
        }
    }

    pub(crate) fn negative(field: &'static str, value: f64) -> Self {
        InputError::NonPhysical {
            field,
            requirement: "non-negative",
            value,
        }
    }

    pub(crate) fn non_finite(field: &'static str, value: f64) -> Self {
        InputError::NonPhysical {
            field,
            requirement: "finite",
            value,
        }
    }
}
