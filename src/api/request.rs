//! Request types for the fleet scheduler API.
//!
//! Incoming payloads carry times as `HH:MM` strings; handlers parse
//! them through the time utilities so the API enforces the same format
//! rules as the core.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DriverStatus, TemplateStatus};

/// Payload for creating or replacing a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverRequest {
    /// Driver id.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Driving licence number.
    pub license_number: String,
    /// Contact email.
    pub email: String,
    /// Whether the driver can take assignments; defaults to active.
    #[serde(default = "default_driver_status")]
    pub status: DriverStatus,
}

fn default_driver_status() -> DriverStatus {
    DriverStatus::Active
}

/// Payload for creating or replacing a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Route id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Starting point.
    pub origin: String,
    /// End point.
    pub destination: String,
    /// Nominal driving duration in minutes.
    pub duration_minutes: u32,
}

/// Payload for creating a shift template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRequest {
    /// Route the template serves.
    pub route_id: String,
    /// Day of week the shift recurs on.
    pub day: Weekday,
    /// Shift start as `HH:MM`.
    pub start_time: String,
    /// Shift end as `HH:MM`.
    pub end_time: String,
    /// ISO-style week number, 1–52.
    pub week_number: u32,
    /// Template status; defaults to active.
    #[serde(default = "default_template_status")]
    pub status: TemplateStatus,
}

fn default_template_status() -> TemplateStatus {
    TemplateStatus::Active
}

/// Payload for previewing a week plan over an operating window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Window start as `HH:MM`.
    pub window_start: String,
    /// Window end as `HH:MM`.
    pub window_end: String,
}

/// Payload for validating or creating an assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Shift template the assignment is cut from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_template_id: Option<String>,
    /// Driver to assign.
    pub driver_id: String,
    /// Route to cover.
    pub route_id: String,
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Shift start as `HH:MM`.
    pub start_time: String,
    /// Assignment to leave out of conflict checks, for edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_assignment_id: Option<String>,
}

/// Payload for updating a driver's notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesRequest {
    /// Receive email notifications.
    pub email: bool,
    /// Receive push notifications.
    pub push: bool,
}
