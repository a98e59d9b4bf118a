//! Journey model.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A driver's single-day work session.
///
/// Journeys are derived from assignment data plus a wall-clock reading;
/// the core never persists them. The worked time is accumulated by the
/// calling layer as the driver works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    /// The calendar date of the session.
    pub date: NaiveDate,
    /// Scheduled start time of the session.
    pub start_time: NaiveTime,
    /// Total allotted hours for the day.
    pub total_hours: Decimal,
    /// Whole hours worked so far.
    pub worked_hours: u32,
    /// Minutes worked on top of `worked_hours`.
    pub worked_minutes: u32,
    /// Whether the driver has started the session.
    pub is_active: bool,
}

impl Journey {
    /// Returns the scheduled start combined into a single instant.
    pub fn scheduled_start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Returns the accumulated worked time in minutes.
    pub fn worked_total_minutes(&self) -> i64 {
        i64::from(self.worked_hours) * 60 + i64::from(self.worked_minutes)
    }
}
