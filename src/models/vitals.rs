use serde::{Deserialize, Serialize};

/// Number of samples in a 24-hour series, one every four hours.
pub const SAMPLE_COUNT: usize = 6;

pub const TIME_LABELS: [&str; SAMPLE_COUNT] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

/// One time-stamped reading of SpO2, saline level and heart rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsSample {
    pub time: String,
    /// Oxygen saturation in percent.
    pub spo2: f64,
    /// Remaining saline in percent of the bag.
    pub saline: u8,
    /// Beats per minute.
    pub heart_rate: u32,
}

/// A fixed-length, ordered 24-hour vitals series.
///
/// Always holds exactly [`SAMPLE_COUNT`] samples labelled with [`TIME_LABELS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VitalsSeries {
    samples: [VitalsSample; SAMPLE_COUNT],
}

impl VitalsSeries {
    pub(crate) fn from_samples(samples: [VitalsSample; SAMPLE_COUNT]) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[VitalsSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &VitalsSample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> &VitalsSample {
        &self.samples[SAMPLE_COUNT - 1]
    }

    pub fn spo2(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.spo2).collect()
    }

    pub fn saline(&self) -> Vec<f64> {
        self.samples.iter().map(|s| f64::from(s.saline)).collect()
    }

    pub fn heart_rate(&self) -> Vec<f64> {
        self.samples.iter().map(|s| f64::from(s.heart_rate)).collect()
    }
}

impl<'a> IntoIterator for &'a VitalsSeries {
    type Item = &'a VitalsSample;
    type IntoIter = std::slice::Iter<'a, VitalsSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
