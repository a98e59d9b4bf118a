//! Shift template model.
//!
//! A shift template is a recurring (day-of-week, time-range, week-number)
//! pattern tied to a route. Templates carry no driver; a concrete driver
//! binding on a calendar date is an [`Assignment`](super::Assignment).

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a template is currently part of the published roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStatus {
    /// The template is available for assignment.
    Active,
    /// The template is retired and hidden from assignment flows.
    Inactive,
}

/// A recurring shift pattern on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Unique identifier for the template.
    pub id: String,
    /// The route this template belongs to.
    pub route_id: String,
    /// Day of week the shift recurs on.
    pub day: Weekday,
    /// Shift start time.
    pub start_time: NaiveTime,
    /// Shift end time. Always strictly after `start_time`.
    pub end_time: NaiveTime,
    /// ISO-style week number, 1 through 52.
    pub week_number: u32,
    /// Roster status.
    pub status: TemplateStatus,
}

impl ShiftTemplate {
    /// Returns the template duration as fractional hours.
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::from(minutes) / Decimal::from(60)
    }

    /// Returns the display window of the form "06:00 - 14:00".
    ///
    /// # Examples
    ///
    /// ```
    /// use fleet_scheduler::models::{ShiftTemplate, TemplateStatus};
    /// use chrono::{NaiveTime, Weekday};
    ///
    /// let template = ShiftTemplate {
    ///     id: "tpl_001".to_string(),
    ///     route_id: "rt_001".to_string(),
    ///     day: Weekday::Mon,
    ///     start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
    ///     week_number: 12,
    ///     status: TemplateStatus::Active,
    /// };
    /// assert_eq!(template.schedule_window(), "06:00 - 14:00");
    /// ```
    pub fn schedule_window(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}
