//! View models shared by the text and desktop renderers.

use crate::core::roster::Roster;
use crate::models::patient::{Patient, PatientId};
use crate::state::DashboardState;

pub const APP_NAME: &str = "Mavex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: PatientId,
    pub name: String,
    pub condition: String,
    pub attention: bool,
    pub selected: bool,
}

/// A titled block of label/value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub rows: Vec<(&'static str, String)>,
    pub tags: Vec<String>,
    pub note: Option<String>,
}

impl Panel {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
            tags: Vec::new(),
            note: None,
        }
    }

    fn row(mut self, label: &'static str, value: impl ToString) -> Self {
        self.rows.push((label, value.to_string()));
        self
    }
}

pub fn sidebar_entries(state: &DashboardState, roster: &Roster) -> Vec<SidebarEntry> {
    state
        .visible_patients(roster)
        .into_iter()
        .map(|p| SidebarEntry {
            id: p.id,
            name: p.name.clone(),
            condition: p.condition.clone(),
            attention: p.status.needs_attention(),
            selected: state.is_selected(p.id),
        })
        .collect()
}

pub fn header_title(patient: Option<&Patient>) -> String {
    match patient {
        Some(p) => format!("Patient Dashboard - {}", p.name),
        None => "Patient Dashboard".to_string(),
    }
}

pub fn patient_info(patient: &Patient) -> Panel {
    Panel::new("Patient Information")
        .row("Name", &patient.name)
        .row("Gender", patient.sex.label())
        .row("Medical Condition", &patient.condition)
        .row("Age", patient.age)
        .row("Height", &patient.height)
        .row("Weight", &patient.weight)
        .row("Device ID", &patient.device_id)
        .row("Emergency Contact", &patient.contact)
}

pub fn mental_health(patient: &Patient) -> Panel {
    Panel::new("Mental Health Status")
        .row("Current Status", &patient.mental_status)
        .row("Last Assessment", patient.last_assessment.format("%Y-%m-%d"))
}

/// Only female patients with cycle data get this panel.
pub fn menstrual_tracking(patient: &Patient) -> Option<Panel> {
    let data = patient.menstrual_data()?;
    let mut panel = Panel::new("Menstrual Tracking")
        .row("Last Period", data.last_period.format("%Y-%m-%d"))
        .row("Cycle Length", format!("{} days", data.cycle_length))
        .row("Next Period", data.next_period.format("%Y-%m-%d"))
        .row("Flow", data.flow);
    panel.tags = data.symptoms.clone();
    if !data.is_consistent() {
        panel.note = data
            .projected_next_period()
            .map(|d| format!("Cycle length projects {}", d.format("%Y-%m-%d")));
    }
    Some(panel)
}

/// All detail panels for a patient, in display order.
pub fn detail_panels(patient: &Patient) -> Vec<Panel> {
    let mut panels = vec![patient_info(patient), mental_health(patient)];
    panels.extend(menstrual_tracking(patient));
    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::VitalsGenerator;
    use crate::state::{reduce, Action};

    fn roster() -> Roster {
        Roster::builtin(&mut VitalsGenerator::seeded(5)).unwrap()
    }

    #[test]
    fn sidebar_marks_selection_and_attention() {
        let roster = roster();
        let state = reduce(
            &DashboardState::initial(&roster),
            Action::SelectPatient(PatientId(2)),
            &roster,
        );
        let entries = sidebar_entries(&state, &roster);
        let flags: Vec<_> = entries.iter().map(|e| (e.selected, e.attention)).collect();
        assert_eq!(flags, [(false, false), (true, true), (false, false)]);
    }

    #[test]
    fn menstrual_panel_only_for_female_patient() {
        let roster = roster();
        let titles = |id: u32| -> Vec<&'static str> {
            detail_panels(roster.get(PatientId(id)).unwrap())
                .iter()
                .map(|p| p.title)
                .collect()
        };
        assert_eq!(titles(1), ["Patient Information", "Mental Health Status"]);
        assert_eq!(
            titles(2),
            ["Patient Information", "Mental Health Status", "Menstrual Tracking"]
        );
    }

    #[test]
    fn menstrual_panel_lists_symptoms_without_note_when_consistent() {
        let roster = roster();
        let panel = menstrual_tracking(roster.get(PatientId(2)).unwrap()).unwrap();
        assert_eq!(panel.tags, ["Mild cramps", "Fatigue"]);
        assert!(panel.rows.contains(&("Cycle Length", "28 days".to_string())));
        assert_eq!(panel.note, None);
    }

    #[test]
    fn header_falls_back_without_selection() {
        assert_eq!(header_title(None), "Patient Dashboard");
        let roster = roster();
        assert_eq!(
            header_title(roster.first()),
            "Patient Dashboard - Rajesh Kumar"
        );
    }
}
