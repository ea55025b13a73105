//! Error types for the Mavex dashboard core.

use thiserror::Error;

use crate::models::patient::PatientId;

/// Errors raised while building or querying the patient roster.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("invalid baseline heart rate: {0} (must be finite and non-negative)")]
    InvalidBaseline(f64),

    #[error("no patient with id {0}")]
    UnknownPatient(PatientId),

    #[error("patient id {0} appears more than once in the roster")]
    DuplicatePatient(PatientId),

    #[error("patient {0} is recorded as male but carries menstrual data")]
    MenstrualDataOnMale(PatientId),

    #[error("patient record failed validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("failed to read roster file: {0}")]
    RosterFile(#[from] std::io::Error),

    #[error("malformed roster file: {0}")]
    RosterFormat(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
