//! Plain-text rendering of the dashboard for the terminal.

use std::fmt::{self, Display, Formatter};

use crate::core::data::{Metric, SeriesSummary};
use crate::core::roster::Roster;
use crate::models::patient::Patient;
use crate::models::vitals::VitalsSeries;
use crate::state::DashboardState;
use crate::ui::components::{self, Panel, APP_NAME};

const CHART_HEIGHT: usize = 8;
const COLUMN_WIDTH: usize = 7;
const LABEL_WIDTH: usize = 18;

/// The whole screen: sidebar (when visible), header and detail view.
pub struct DashboardView<'a> {
    pub state: &'a DashboardState,
    pub roster: &'a Roster,
}

/// The patient list with the search box.
pub struct SidebarView<'a> {
    pub state: &'a DashboardState,
    pub roster: &'a Roster,
}

/// Detail panels and the three vitals charts for one patient.
pub struct PatientView<'a> {
    pub patient: &'a Patient,
}

pub struct ChartView<'a> {
    pub metric: Metric,
    pub series: &'a VitalsSeries,
}

impl Display for DashboardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {APP_NAME} ==")?;
        if self.state.sidebar_visible {
            write!(f, "{}", SidebarView { state: self.state, roster: self.roster })?;
        }
        let selected = self.state.selected_patient(self.roster);
        writeln!(f)?;
        writeln!(f, "{}", components::header_title(selected))?;
        writeln!(f, "[Emergency Call] [Call Ambulance] [SOS Alert]")?;
        writeln!(f)?;
        match selected {
            Some(patient) => write!(f, "{}", PatientView { patient }),
            None => writeln!(f, "No patient selected"),
        }
    }
}

impl Display for SidebarView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.state.search_term.is_empty() {
            writeln!(f, "Search patients...")?;
        } else {
            writeln!(f, "Search: {}", self.state.search_term)?;
        }
        writeln!(f, "[+ Add New Patient]")?;
        let entries = components::sidebar_entries(self.state, self.roster);
        if entries.is_empty() {
            return writeln!(f, "  (no matching patients)");
        }
        for entry in entries {
            let marker = if entry.selected { '>' } else { ' ' };
            let flag = if entry.attention { " (!)" } else { "" };
            writeln!(f, "{marker} [{}] {}{flag}", entry.id, entry.name)?;
            writeln!(f, "      {}", entry.condition)?;
        }
        Ok(())
    }
}

impl Display for PatientView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for panel in components::detail_panels(self.patient) {
            write_panel(f, &panel)?;
            writeln!(f)?;
        }
        for metric in Metric::ALL {
            write!(f, "{}", ChartView { metric, series: &self.patient.data })?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_panel(f: &mut Formatter<'_>, panel: &Panel) -> fmt::Result {
    writeln!(f, "-- {} --", panel.title)?;
    for (label, value) in &panel.rows {
        writeln!(f, "{:<width$} {value}", format!("{label}:"), width = LABEL_WIDTH)?;
    }
    if !panel.tags.is_empty() {
        writeln!(f, "Symptoms:")?;
        let tags: Vec<String> = panel.tags.iter().map(|t| format!("({t})")).collect();
        writeln!(f, "  {}", tags.join(" "))?;
    }
    if let Some(note) = &panel.note {
        writeln!(f, "note: {note}")?;
    }
    Ok(())
}

impl Display for ChartView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let metric = self.metric;
        let (lo, hi) = metric.domain();
        let top = CHART_HEIGHT - 1;
        let levels: Vec<usize> = metric
            .values(self.series)
            .into_iter()
            .map(|v| (metric.normalize(v) * top as f64).round() as usize)
            .collect();

        writeln!(f, "{} ({})", metric.title(), metric.unit())?;
        for row in 0..CHART_HEIGHT {
            let level = top - row;
            let axis = lo + (hi - lo) * level as f64 / top as f64;
            write!(f, "{axis:>5.0} |")?;
            for &sample in &levels {
                let cell = if sample == level { "*" } else { " " };
                write!(f, "{cell:^width$}", width = COLUMN_WIDTH)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "      +{}", "-".repeat(COLUMN_WIDTH * levels.len()))?;
        write!(f, "       ")?;
        for sample in self.series {
            write!(f, "{:^width$}", sample.time, width = COLUMN_WIDTH)?;
        }
        writeln!(f)?;

        let summary = SeriesSummary::of(metric, self.series);
        writeln!(
            f,
            "       latest {:.1}  min {:.1}  max {:.1}  avg {:.1}",
            summary.latest, summary.min, summary.max, summary.mean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::VitalsGenerator;
    use crate::models::patient::PatientId;
    use crate::state::{reduce, Action};

    fn roster() -> Roster {
        Roster::builtin(&mut VitalsGenerator::seeded(9)).unwrap()
    }

    #[test]
    fn dashboard_shows_selected_patient_header() {
        let roster = roster();
        let state = reduce(
            &DashboardState::initial(&roster),
            Action::SelectPatient(PatientId(3)),
            &roster,
        );
        let out = DashboardView { state: &state, roster: &roster }.to_string();
        assert!(out.contains("Patient Dashboard - Amit Patel"));
        assert!(out.contains("> [3] Amit Patel"));
        assert!(out.contains("  [2] Priya Sharma (!)"));
        assert!(!out.contains("Menstrual Tracking"));
    }

    #[test]
    fn hidden_sidebar_is_not_rendered() {
        let roster = roster();
        let state = DashboardState::initial(&roster).with_sidebar(false);
        let out = DashboardView { state: &state, roster: &roster }.to_string();
        assert!(!out.contains("Add New Patient"));
        assert!(out.contains("Patient Dashboard - Rajesh Kumar"));
    }

    #[test]
    fn female_patient_view_includes_cycle_panel() {
        let roster = roster();
        let out = PatientView { patient: roster.get(PatientId(2)).unwrap() }.to_string();
        assert!(out.contains("-- Menstrual Tracking --"));
        assert!(out.contains("(Mild cramps) (Fatigue)"));
        assert!(out.contains("28 days"));
    }

    #[test]
    fn chart_has_one_point_per_sample_and_all_labels() {
        let roster = roster();
        let series = &roster.first().unwrap().data;
        let out = ChartView { metric: Metric::Saline, series }.to_string();
        assert_eq!(out.matches('*').count(), 6);
        for label in crate::models::vitals::TIME_LABELS {
            assert!(out.contains(label));
        }
        assert!(out.starts_with("Saline Level (%)"));
    }

    #[test]
    fn empty_search_result_is_reported() {
        let roster = roster();
        let state = reduce(
            &DashboardState::initial(&roster),
            Action::Search("zzz".into()),
            &roster,
        );
        let out = SidebarView { state: &state, roster: &roster }.to_string();
        assert!(out.contains("(no matching patients)"));
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        let roster = Roster::default();
        let state = DashboardState::initial(&roster);
        let out = DashboardView { state: &state, roster: &roster }.to_string();
        assert!(out.contains("No patient selected"));
    }
}
