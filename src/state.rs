//! Dashboard view state and its reducer.
//!
//! [`DashboardState`] is a plain value. [`reduce`] takes the current state and
//! an [`Action`] and returns the next one; the roster is only read.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::roster::Roster;
use crate::models::patient::{Patient, PatientId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    /// `None` only when the roster is empty.
    pub selected: Option<PatientId>,
    pub sidebar_visible: bool,
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectPatient(PatientId),
    ShowSidebar,
    HideSidebar,
    ToggleSidebar,
    Search(String),
}

impl DashboardState {
    /// Initial state: first patient selected, sidebar open, empty search.
    pub fn initial(roster: &Roster) -> Self {
        Self {
            selected: roster.first().map(|p| p.id),
            sidebar_visible: true,
            search_term: String::new(),
        }
    }

    pub fn with_sidebar(mut self, visible: bool) -> Self {
        self.sidebar_visible = visible;
        self
    }

    pub fn selected_patient<'r>(&self, roster: &'r Roster) -> Option<&'r Patient> {
        self.selected.and_then(|id| roster.get(id))
    }

    /// Sidebar entries for the current search term.
    pub fn visible_patients<'r>(&self, roster: &'r Roster) -> Vec<&'r Patient> {
        roster.filter(&self.search_term)
    }

    pub fn is_selected(&self, id: PatientId) -> bool {
        self.selected == Some(id)
    }
}

pub fn reduce(state: &DashboardState, action: Action, roster: &Roster) -> DashboardState {
    let mut next = state.clone();
    match action {
        Action::SelectPatient(id) if roster.contains(id) => {
            if state.selected != Some(id) {
                debug!(patient_id = %id, "patient selected");
                next.selected = Some(id);
            }
        }
        Action::SelectPatient(id) => {
            warn!(patient_id = %id, "ignoring selection of unknown patient");
        }
        Action::ShowSidebar => next.sidebar_visible = true,
        Action::HideSidebar => next.sidebar_visible = false,
        Action::ToggleSidebar => next.sidebar_visible = !state.sidebar_visible,
        Action::Search(term) => next.search_term = term,
    }
    next
}
