//! Synthetic vitals generation.
//!
//! Each patient gets a 24-hour series sampled every four hours. Heart rate
//! jitters upward from the patient's baseline, SpO2 jitters around a fixed
//! curve and is clamped to [95, 100], and saline drains on a fixed schedule.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::{MonitorError, Result};
use crate::models::vitals::{VitalsSample, VitalsSeries, SAMPLE_COUNT, TIME_LABELS};

pub const BASE_SPO2: [f64; SAMPLE_COUNT] = [98.0, 97.0, 99.0, 98.0, 96.0, 97.0];
pub const SALINE_SCHEDULE: [u8; SAMPLE_COUNT] = [100, 85, 70, 55, 40, 25];

pub const SPO2_FLOOR: f64 = 95.0;
pub const SPO2_CEILING: f64 = 100.0;
/// Upper bound of the heart-rate jitter added to the baseline.
pub const HEART_RATE_JITTER: f64 = 5.0;
pub const MAX_BASELINE: f64 = 300.0;

/// Nominal resting heart rate around which a series is generated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BaselineHeartRate(f64);

impl BaselineHeartRate {
    pub fn new(bpm: f64) -> Result<Self> {
        if !bpm.is_finite() || !(0.0..=MAX_BASELINE).contains(&bpm) {
            return Err(MonitorError::InvalidBaseline(bpm));
        }
        Ok(Self(bpm))
    }

    pub fn bpm(self) -> f64 {
        self.0
    }

    /// Whole-number heart rates within `[baseline, baseline + jitter]`.
    fn heart_rate_bounds(self) -> (f64, f64) {
        (self.0.ceil(), (self.0 + HEART_RATE_JITTER).floor())
    }
}

impl TryFrom<f64> for BaselineHeartRate {
    type Error = MonitorError;

    fn try_from(bpm: f64) -> Result<Self> {
        Self::new(bpm)
    }
}

/// Produces vitals series from an injected random source.
pub struct VitalsGenerator<R = StdRng> {
    rng: R,
}

impl VitalsGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same series.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> VitalsGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a fresh series. Each call draws new jitter.
    pub fn generate(&mut self, baseline: BaselineHeartRate) -> VitalsSeries {
        let (hr_floor, hr_ceiling) = baseline.heart_rate_bounds();
        let samples = std::array::from_fn(|i| {
            let heart_rate = baseline.bpm() + self.rng.gen::<f64>() * HEART_RATE_JITTER;
            let spo2 = BASE_SPO2[i] + (self.rng.gen::<f64>() * 2.0 - 1.0);
            VitalsSample {
                time: TIME_LABELS[i].to_string(),
                spo2: spo2.clamp(SPO2_FLOOR, SPO2_CEILING),
                saline: SALINE_SCHEDULE[i],
                heart_rate: heart_rate.round().clamp(hr_floor, hr_ceiling) as u32,
            }
        });
        trace!(baseline = baseline.bpm(), "generated vitals series");
        VitalsSeries::from_samples(samples)
    }
}
