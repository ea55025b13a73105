use serde::Serialize;

use crate::models::vitals::VitalsSeries;

/// The three charted vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Spo2,
    Saline,
    HeartRate,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Spo2, Metric::Saline, Metric::HeartRate];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Spo2 => "SPO2 Levels",
            Metric::Saline => "Saline Level",
            Metric::HeartRate => "Heart Rate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Spo2 | Metric::Saline => "%",
            Metric::HeartRate => "bpm",
        }
    }

    /// Fixed y-axis range of the chart.
    pub fn domain(self) -> (f64, f64) {
        match self {
            Metric::Spo2 => (90.0, 100.0),
            Metric::Saline => (0.0, 100.0),
            Metric::HeartRate => (50.0, 100.0),
        }
    }

    /// Line colour as RGB bytes.
    pub fn color(self) -> [u8; 3] {
        match self {
            Metric::Spo2 => [0x25, 0x63, 0xeb],
            Metric::Saline => [0x08, 0x91, 0xb2],
            Metric::HeartRate => [0xdc, 0x26, 0x26],
        }
    }

    pub fn values(self, series: &VitalsSeries) -> Vec<f64> {
        match self {
            Metric::Spo2 => series.spo2(),
            Metric::Saline => series.saline(),
            Metric::HeartRate => series.heart_rate(),
        }
    }

    /// Where `value` falls within the domain, clamped to `[0, 1]`.
    pub fn normalize(self, value: f64) -> f64 {
        let (lo, hi) = self.domain();
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub latest: f64,
}

impl SeriesSummary {
    pub fn of(metric: Metric, series: &VitalsSeries) -> Self {
        let values = metric.values(series);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let latest = values.last().copied().unwrap_or(f64::NAN);
        Self { min, max, mean, latest }
    }
}
