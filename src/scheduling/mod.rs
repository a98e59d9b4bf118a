//! Scheduling logic for the fleet scheduling core.
//!
//! This module contains the pure functions behind shift scheduling:
//! time parsing and interval math, assignment validation (conflict
//! detection and daily-hour-cap enforcement), week planning for shift
//! templates, and journey progress tracking with threshold alerts.

mod template_plan;
mod time_utils;
mod tracker;
mod validator;

pub use template_plan::{PlannedShift, WeekPlan, copy_week, plan_week, validate_template};
pub use time_utils::{duration_hours, format_duration, intervals_overlap, to_minutes};
pub use tracker::{
    AlertKind, AlertSeverity, JourneyAlert, JourneyProgress, JourneyTracker, JourneyView,
};
pub use validator::{AssignmentCandidate, ValidationOutcome, validate_assignment};
