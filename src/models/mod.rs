pub mod patient;
pub mod vitals;

pub use patient::{Flow, MenstrualData, Patient, PatientId, Sex, Status};
pub use vitals::{VitalsSample, VitalsSeries, SAMPLE_COUNT, TIME_LABELS};
