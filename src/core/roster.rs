//! The in-memory patient roster.
//!
//! Records are built once at start-up, either from the built-in ward list or
//! from a JSON roster file, and never change afterwards.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::core::generator::{BaselineHeartRate, VitalsGenerator};
use crate::error::{MonitorError, Result};
use crate::models::patient::{Flow, MenstrualData, Patient, PatientId, Sex, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SexTag {
    Male,
    Female,
}

/// A patient as authored in a roster file, before vitals are generated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatientRecord {
    pub id: PatientId,
    #[validate(length(min = 1))]
    pub name: String,
    pub gender: SexTag,
    pub condition: String,
    #[validate(range(max = 130))]
    pub age: u32,
    pub height: String,
    pub weight: String,
    pub device_id: String,
    pub contact: String,
    pub status: Status,
    pub mental_status: String,
    pub last_assessment: NaiveDate,
    #[validate(range(min = 0.0, max = 300.0))]
    pub baseline_heart_rate: f64,
    #[serde(default)]
    #[validate]
    pub menstrual_data: Option<MenstrualData>,
}

impl PatientRecord {
    fn into_patient<R: Rng>(self, generator: &mut VitalsGenerator<R>) -> Result<Patient> {
        let baseline = BaselineHeartRate::new(self.baseline_heart_rate)?;
        self.validate()?;

        let sex = match (self.gender, self.menstrual_data) {
            (SexTag::Male, Some(_)) => return Err(MonitorError::MenstrualDataOnMale(self.id)),
            (SexTag::Male, None) => Sex::Male,
            (SexTag::Female, menstrual) => {
                if let Some(data) = menstrual.as_ref().filter(|m| !m.is_consistent()) {
                    debug!(
                        patient_id = %self.id,
                        entered = %data.next_period,
                        projected = ?data.projected_next_period(),
                        "next period disagrees with last period + cycle length"
                    );
                }
                Sex::Female { menstrual }
            }
        };

        Ok(Patient {
            id: self.id,
            name: self.name,
            sex,
            condition: self.condition,
            age: self.age,
            height: self.height,
            weight: self.weight,
            device_id: self.device_id,
            contact: self.contact,
            status: self.status,
            mental_status: self.mental_status,
            last_assessment: self.last_assessment,
            data: generator.generate(baseline),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    patients: Vec<Patient>,
}

impl Roster {
    /// Build a roster, generating each patient's vitals in record order.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn from_records<R: Rng>(
        records: Vec<PatientRecord>,
        generator: &mut VitalsGenerator<R>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut patients = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                return Err(MonitorError::DuplicatePatient(record.id));
            }
            patients.push(record.into_patient(generator)?);
        }
        info!(patients = patients.len(), "roster loaded");
        Ok(Self { patients })
    }

    /// The built-in ward list.
    pub fn builtin<R: Rng>(generator: &mut VitalsGenerator<R>) -> Result<Self> {
        Self::from_records(builtin_records(), generator)
    }

    /// Load a JSON array of [`PatientRecord`]s.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<R: Rng>(
        path: impl AsRef<Path>,
        generator: &mut VitalsGenerator<R>,
    ) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let records: Vec<PatientRecord> = serde_json::from_str(&raw)?;
        Self::from_records(records, generator)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn first(&self) -> Option<&Patient> {
        self.patients.first()
    }

    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: PatientId) -> Result<&Patient> {
        self.get(id).ok_or(MonitorError::UnknownPatient(id))
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.get(id).is_some()
    }

    /// Patients whose name contains `query`, ignoring case, in roster order.
    pub fn filter(&self, query: &str) -> Vec<&Patient> {
        filter_patients(&self.patients, query)
    }
}

pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    patients.iter().filter(|p| p.name_matches(query)).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn builtin_records() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            id: PatientId(1),
            name: "Rajesh Kumar".into(),
            gender: SexTag::Male,
            condition: "Post-surgery Recovery".into(),
            age: 45,
            height: "175 cm".into(),
            weight: "70 kg".into(),
            device_id: "MD-123456789".into(),
            contact: "+91 98765 43210".into(),
            status: Status::Stable,
            mental_status: "Stable".into(),
            last_assessment: date(2024, 3, 15),
            baseline_heart_rate: 72.0,
            menstrual_data: None,
        },
        PatientRecord {
            id: PatientId(2),
            name: "Priya Sharma".into(),
            gender: SexTag::Female,
            condition: "Cardiac Monitoring".into(),
            age: 32,
            height: "165 cm".into(),
            weight: "65 kg".into(),
            device_id: "MD-987654321".into(),
            contact: "+91 87654 32109".into(),
            status: Status::Attention,
            mental_status: "Mild Anxiety".into(),
            last_assessment: date(2024, 3, 14),
            baseline_heart_rate: 78.0,
            menstrual_data: Some(MenstrualData {
                last_period: date(2024, 3, 1),
                cycle_length: 28,
                next_period: date(2024, 3, 29),
                flow: Flow::Moderate,
                symptoms: vec!["Mild cramps".into(), "Fatigue".into()],
            }),
        },
        PatientRecord {
            id: PatientId(3),
            name: "Amit Patel".into(),
            gender: SexTag::Male,
            condition: "Diabetes Management".into(),
            age: 53,
            height: "180 cm".into(),
            weight: "82 kg".into(),
            device_id: "MD-456789123".into(),
            contact: "+91 76543 21098".into(),
            status: Status::Stable,
            mental_status: "Good".into(),
            last_assessment: date(2024, 3, 13),
            baseline_heart_rate: 68.0,
            menstrual_data: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn roster() -> Roster {
        Roster::builtin(&mut VitalsGenerator::seeded(42)).unwrap()
    }

    fn names(patients: &[&Patient]) -> Vec<String> {
        patients.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everyone_in_order() {
        let roster = roster();
        assert_eq!(
            names(&roster.filter("")),
            ["Rajesh Kumar", "Priya Sharma", "Amit Patel"]
        );
    }

    #[test_case("priya", &["Priya Sharma"] ; "lowercase")]
    #[test_case("PRIYA", &["Priya Sharma"] ; "uppercase")]
    #[test_case("t p", &["Amit Patel"] ; "across the space")]
    #[test_case("sh", &["Rajesh Kumar", "Priya Sharma"] ; "several matches keep order")]
    #[test_case("zzz", &[] ; "no match")]
    fn filters_by_name(query: &str, expected: &[&str]) {
        assert_eq!(names(&roster().filter(query)), expected);
    }

    #[test]
    fn filter_on_empty_roster_is_empty() {
        assert!(Roster::default().filter("").is_empty());
        assert!(Roster::default().first().is_none());
    }

    #[test]
    fn builtin_roster_tags_menstrual_data_by_sex() {
        let roster = roster();
        for patient in roster.patients() {
            match patient.sex {
                Sex::Male => assert!(patient.menstrual_data().is_none()),
                Sex::Female { .. } => assert!(patient.menstrual_data().is_some()),
            }
        }
        let priya = roster.get(PatientId(2)).unwrap();
        let cycle = priya.menstrual_data().unwrap();
        assert_eq!(cycle.symptoms, ["Mild cramps", "Fatigue"]);
        assert_eq!(cycle.flow, Flow::Moderate);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut records = builtin_records();
        records[2].id = PatientId(1);
        let err = Roster::from_records(records, &mut VitalsGenerator::seeded(1)).unwrap_err();
        assert!(matches!(err, MonitorError::DuplicatePatient(PatientId(1))));
    }

    #[test]
    fn rejects_menstrual_data_on_male_record() {
        let mut records = builtin_records();
        records[0].menstrual_data = records[1].menstrual_data.clone();
        let err = Roster::from_records(records, &mut VitalsGenerator::seeded(1)).unwrap_err();
        assert!(matches!(err, MonitorError::MenstrualDataOnMale(PatientId(1))));
    }

    #[test]
    fn rejects_invalid_baseline() {
        let mut records = builtin_records();
        records[1].baseline_heart_rate = f64::NAN;
        let err = Roster::from_records(records, &mut VitalsGenerator::seeded(1)).unwrap_err();
        assert!(matches!(err, MonitorError::InvalidBaseline(_)));
    }

    #[test]
    fn rejects_blank_name() {
        let mut records = builtin_records();
        records[0].name.clear();
        let err = Roster::from_records(records, &mut VitalsGenerator::seeded(1)).unwrap_err();
        assert!(matches!(err, MonitorError::Validation(_)));
    }

    #[test]
    fn require_reports_unknown_ids() {
        assert!(matches!(
            roster().require(PatientId(99)),
            Err(MonitorError::UnknownPatient(PatientId(99)))
        ));
    }
}
