//! Error types for the fleet scheduling core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur during scheduling. Every error
//! is recoverable at the call site; none is fatal to the process.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the fleet scheduling core.
///
/// All operations in the crate return this error type, making it easy
/// to handle failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use fleet_scheduler::error::ScheduleError;
///
/// let error = ScheduleError::DriverNotFound {
///     driver_id: "drv_042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Driver not found: drv_042");
/// ```
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time string did not match the 24-hour `HH:MM` format.
    #[error("Invalid time format: '{value}' (expected 24-hour HH:MM)")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// The referenced driver does not exist.
    #[error("Driver not found: {driver_id}")]
    DriverNotFound {
        /// The driver id that was not found.
        driver_id: String,
    },

    /// The referenced route does not exist.
    #[error("Route not found: {route_id}")]
    RouteNotFound {
        /// The route id that was not found.
        route_id: String,
    },

    /// The referenced shift template does not exist.
    #[error("Shift template not found: {template_id}")]
    TemplateNotFound {
        /// The template id that was not found.
        template_id: String,
    },

    /// The referenced assignment does not exist.
    #[error("Assignment not found: {assignment_id}")]
    AssignmentNotFound {
        /// The assignment id that was not found.
        assignment_id: String,
    },

    /// The driver exists but is not in active status.
    #[error("Driver '{driver_id}' is inactive and cannot be assigned")]
    DriverInactive {
        /// The inactive driver's id.
        driver_id: String,
    },

    /// The candidate window would not end on the same calendar day.
    #[error(
        "Shift starting at {start_time} with a {duration_minutes}-minute route would run past midnight"
    )]
    ShiftCrossesMidnight {
        /// The candidate start time.
        start_time: NaiveTime,
        /// The route's nominal duration in minutes.
        duration_minutes: u32,
    },

    /// The proposed assignment overlaps an existing one for the same
    /// driver or the same route on that date.
    #[error("driver or route already occupied in the requested window")]
    SchedulingConflict,

    /// The proposed assignment would push the driver past the daily cap.
    #[error("Daily hour cap exceeded: projected total {total_hours}h is over the {cap_hours}h limit")]
    DailyHourCapExceeded {
        /// The projected same-day total including the candidate.
        total_hours: Decimal,
        /// The configured cap the total was checked against.
        cap_hours: Decimal,
    },

    /// A shift template was invalid or contained inconsistent data.
    #[error("Invalid shift template field '{field}': {message}")]
    InvalidTemplate {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An assignment lifecycle transition was not allowed.
    #[error("Invalid transition for assignment '{assignment_id}': {message}")]
    InvalidTransition {
        /// The id of the assignment being mutated.
        assignment_id: String,
        /// A description of the rejected transition.
        message: String,
    },

    /// A week planning request could not produce any shifts.
    #[error("Shift planning failed: {message}")]
    PlanningError {
        /// A description of the planning failure.
        message: String,
    },
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
