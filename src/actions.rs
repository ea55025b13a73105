//! Stub collaborators behind the dashboard's action buttons.
//!
//! Nothing here places calls or registers patients. The shipped
//! implementation logs the intent and acknowledges it so the shell has
//! something to show.

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::core::roster::Roster;
use crate::state::DashboardState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// What the collaborator reports back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Telephony and dispatch.
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn emergency_call(&self, contact: &str) -> Result<Acknowledgement, ActionError>;
    fn ambulance_call(&self) -> Result<Acknowledgement, ActionError>;
    fn sos_alert(&self, contact: &str) -> Result<Acknowledgement, ActionError>;
}

/// Patient registration.
#[cfg_attr(test, automock)]
pub trait Registrar {
    fn open_registration(&self) -> Result<Acknowledgement, ActionError>;
}

/// Logs every request and acknowledges it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl Dispatcher for LoggingNotifier {
    #[instrument(skip(self))]
    fn emergency_call(&self, contact: &str) -> Result<Acknowledgement, ActionError> {
        info!("emergency call requested");
        Ok(Acknowledgement::new(format!("Initiating emergency call to {contact}")))
    }

    #[instrument(skip(self))]
    fn ambulance_call(&self) -> Result<Acknowledgement, ActionError> {
        info!("ambulance dispatch requested");
        Ok(Acknowledgement::new(
            "Dispatching ambulance to patient's location. Emergency services will be notified.",
        ))
    }

    #[instrument(skip(self))]
    fn sos_alert(&self, contact: &str) -> Result<Acknowledgement, ActionError> {
        warn!("SOS alert raised");
        Ok(Acknowledgement::new(format!("SOS alert raised for {contact}")))
    }
}

impl Registrar for LoggingNotifier {
    #[instrument(skip(self))]
    fn open_registration(&self) -> Result<Acknowledgement, ActionError> {
        info!("patient registration requested");
        Ok(Acknowledgement::new("Opening patient registration form"))
    }
}

/// Renders a collaborator reply as the notice shown to the user.
pub fn notice(result: Result<Acknowledgement, ActionError>) -> String {
    match result {
        Ok(ack) => ack.message,
        Err(err) => format!("Error: {err}"),
    }
}

/// Call the selected patient's emergency contact.
///
/// Returns the notice to show, or `None` when no patient is selected.
pub fn emergency_call(
    state: &DashboardState,
    roster: &Roster,
    dispatcher: &impl Dispatcher,
) -> Option<String> {
    let Some(patient) = state.selected_patient(roster) else {
        debug!("emergency call skipped: no patient selected");
        return None;
    };
    Some(notice(dispatcher.emergency_call(&patient.contact)))
}

/// Raise an SOS alert for the selected patient.
pub fn sos_alert(
    state: &DashboardState,
    roster: &Roster,
    dispatcher: &impl Dispatcher,
) -> Option<String> {
    let Some(patient) = state.selected_patient(roster) else {
        debug!("SOS alert skipped: no patient selected");
        return None;
    };
    Some(notice(dispatcher.sos_alert(&patient.contact)))
}
