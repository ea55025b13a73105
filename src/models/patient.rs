use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vitals::VitalsSeries;

/// Session-stable patient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PatientId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Stable,
    Attention,
}

impl Status {
    pub fn needs_attention(self) -> bool {
        matches!(self, Status::Attention)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Stable => f.write_str("stable"),
            Status::Attention => f.write_str("attention"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Light,
    Moderate,
    Heavy,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Flow::Light => "Light",
            Flow::Moderate => "Moderate",
            Flow::Heavy => "Heavy",
        };
        f.write_str(label)
    }
}

/// Cycle tracking data, only ever attached to female patients.
///
/// `next_period` is entered independently of `last_period` and
/// `cycle_length`; the two are allowed to disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenstrualData {
    #[serde(alias = "last_period")]
    pub last_period: NaiveDate,
    #[validate(range(min = 1, max = 90))]
    #[serde(alias = "cycle_length")]
    pub cycle_length: u32,
    #[serde(alias = "next_period")]
    pub next_period: NaiveDate,
    pub flow: Flow,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

impl MenstrualData {
    /// `last_period + cycle_length` days.
    pub fn projected_next_period(&self) -> Option<NaiveDate> {
        self.last_period
            .checked_add_days(Days::new(u64::from(self.cycle_length)))
    }

    /// Whether the entered next period matches the projection.
    pub fn is_consistent(&self) -> bool {
        self.projected_next_period() == Some(self.next_period)
    }
}

/// Sex-tagged profile. Menstrual data can only exist on the female variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "gender")]
pub enum Sex {
    Male,
    Female {
        #[serde(rename = "menstrualData", skip_serializing_if = "Option::is_none")]
        menstrual: Option<MenstrualData>,
    },
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female { .. } => "Female",
        }
    }

    pub fn menstrual_data(&self) -> Option<&MenstrualData> {
        match self {
            Sex::Female { menstrual } => menstrual.as_ref(),
            Sex::Male => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    #[serde(flatten)]
    pub sex: Sex,
    pub condition: String,
    pub age: u32,
    pub height: String,
    pub weight: String,
    pub device_id: String,
    pub contact: String,
    pub status: Status,
    pub mental_status: String,
    pub last_assessment: NaiveDate,
    pub data: VitalsSeries,
}

impl Patient {
    pub fn menstrual_data(&self) -> Option<&MenstrualData> {
        self.sex.menstrual_data()
    }

    /// Case-insensitive substring match on the patient's name.
    pub fn name_matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
