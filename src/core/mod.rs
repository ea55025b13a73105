pub mod data;
pub mod generator;
pub mod roster;

pub use data::{Metric, SeriesSummary};
pub use generator::{BaselineHeartRate, VitalsGenerator};
pub use roster::{filter_patients, PatientRecord, Roster};
