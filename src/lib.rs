//! Mavex patient monitoring dashboard core library
//!
//! Patient records, synthetic vitals generation, name search and the
//! dashboard view state, plus text and desktop renderers on top.

pub mod actions;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod state;
pub mod telemetry;
pub mod ui;

pub use crate::core::{Roster, VitalsGenerator};
pub use crate::error::{MonitorError, Result};
pub use crate::state::{reduce, Action, DashboardState};
