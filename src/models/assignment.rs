//! Assignment model and lifecycle.
//!
//! An assignment binds a driver to a shift template on a specific calendar
//! date. The times are copied onto the assignment when it is created, so
//! every consumer works against one flat, canonical shape instead of
//! reaching through nested template and route objects.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Lifecycle state of an assignment.
///
/// Legal transitions are `Scheduled → InProgress → Completed`, with
/// `Cancelled` reachable from `Scheduled` and `InProgress`. The two
/// terminal states are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Created by an admin, not yet started by the driver.
    Scheduled,
    /// The driver has started the shift.
    InProgress,
    /// The driver has finished the shift. Terminal.
    Completed,
    /// Cancelled by an admin before completion. Terminal.
    Cancelled,
}

impl AssignmentStatus {
    /// Returns true for states that still occupy the driver and route.
    ///
    /// Terminal assignments never participate in conflict detection or
    /// daily-hour totals.
    pub fn is_active(self) -> bool {
        matches!(self, AssignmentStatus::Scheduled | AssignmentStatus::InProgress)
    }
}

/// A concrete driver-to-shift binding on a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The shift template this assignment was created from.
    pub shift_template_id: String,
    /// The assigned driver.
    pub driver_id: String,
    /// The route being served.
    pub route_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Scheduled start time.
    pub start_time: NaiveTime,
    /// Scheduled end time.
    pub end_time: NaiveTime,
    /// Current lifecycle state.
    pub status: AssignmentStatus,
    /// When the driver actually started, if they have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<NaiveDateTime>,
    /// When the driver actually finished, if they have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end: Option<NaiveDateTime>,
}

impl Assignment {
    /// Returns the scheduled start as minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        (self.start_time - NaiveTime::MIN).num_minutes()
    }

    /// Returns the scheduled duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Returns the scheduled duration as fractional hours.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration_minutes()) / Decimal::from(60)
    }

    /// Returns the display window of the form "06:00 - 14:00".
    pub fn schedule_window(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// Marks the assignment as started by the driver.
    ///
    /// Only scheduled assignments can be started.
    pub fn start(&mut self, at: NaiveDateTime) -> ScheduleResult<()> {
        if self.status != AssignmentStatus::Scheduled {
            return Err(ScheduleError::InvalidTransition {
                assignment_id: self.id.clone(),
                message: "only scheduled assignments can be started".to_string(),
            });
        }
        self.status = AssignmentStatus::InProgress;
        self.actual_start = Some(at);
        Ok(())
    }

    /// Marks the assignment as finished by the driver.
    ///
    /// Only in-progress assignments can be finished.
    pub fn finish(&mut self, at: NaiveDateTime) -> ScheduleResult<()> {
        if self.status != AssignmentStatus::InProgress {
            return Err(ScheduleError::InvalidTransition {
                assignment_id: self.id.clone(),
                message: "only in-progress assignments can be finished".to_string(),
            });
        }
        self.status = AssignmentStatus::Completed;
        self.actual_end = Some(at);
        Ok(())
    }

    /// Cancels the assignment.
    ///
    /// Terminal assignments (completed or already cancelled) cannot be
    /// cancelled.
    pub fn cancel(&mut self) -> ScheduleResult<()> {
        if !self.status.is_active() {
            return Err(ScheduleError::InvalidTransition {
                assignment_id: self.id.clone(),
                message: "completed or cancelled assignments cannot be cancelled".to_string(),
            });
        }
        self.status = AssignmentStatus::Cancelled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn wall_clock(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn create_test_assignment(status: AssignmentStatus) -> Assignment {
        Assignment {
            id: "asg_001".to_string(),
            shift_template_id: "tpl_001".to_string(),
            driver_id: "drv_001".to_string(),
            route_id: "rt_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
            start_time: time(6, 0),
            end_time: time(14, 0),
            status,
            actual_start: None,
            actual_end: None,
        }
    }

    #[test]
    fn test_duration_and_start_minutes() {
        let assignment = create_test_assignment(AssignmentStatus::Scheduled);
        assert_eq!(assignment.start_minutes(), 360);
        assert_eq!(assignment.duration_minutes(), 480);
        assert_eq!(assignment.duration_hours(), Decimal::from(8));
    }

    #[test]
    fn test_schedule_window_format() {
        let assignment = create_test_assignment(AssignmentStatus::Scheduled);
        assert_eq!(assignment.schedule_window(), "06:00 - 14:00");
    }

    #[test]
    fn test_start_from_scheduled_succeeds() {
        let mut assignment = create_test_assignment(AssignmentStatus::Scheduled);
        assert!(assignment.start(wall_clock(6, 2)).is_ok());
        assert_eq!(assignment.status, AssignmentStatus::InProgress);
        assert_eq!(assignment.actual_start, Some(wall_clock(6, 2)));
    }

    #[test]
    fn test_start_from_in_progress_fails() {
        let mut assignment = create_test_assignment(AssignmentStatus::InProgress);
        let result = assignment.start(wall_clock(6, 2));
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_finish_from_in_progress_succeeds() {
        let mut assignment = create_test_assignment(AssignmentStatus::InProgress);
        assert!(assignment.finish(wall_clock(14, 1)).is_ok());
        assert_eq!(assignment.status, AssignmentStatus::Completed);
        assert_eq!(assignment.actual_end, Some(wall_clock(14, 1)));
    }

    #[test]
    fn test_finish_from_scheduled_fails() {
        let mut assignment = create_test_assignment(AssignmentStatus::Scheduled);
        assert!(assignment.finish(wall_clock(14, 1)).is_err());
        assert_eq!(assignment.status, AssignmentStatus::Scheduled);
    }

    #[test]
    fn test_cancel_from_scheduled_and_in_progress() {
        let mut scheduled = create_test_assignment(AssignmentStatus::Scheduled);
        assert!(scheduled.cancel().is_ok());
        assert_eq!(scheduled.status, AssignmentStatus::Cancelled);

        let mut in_progress = create_test_assignment(AssignmentStatus::InProgress);
        assert!(in_progress.cancel().is_ok());
        assert_eq!(in_progress.status, AssignmentStatus::Cancelled);
    }

    #[test]
    fn test_cancel_terminal_states_fails() {
        let mut completed = create_test_assignment(AssignmentStatus::Completed);
        assert!(completed.cancel().is_err());
        assert_eq!(completed.status, AssignmentStatus::Completed);

        let mut cancelled = create_test_assignment(AssignmentStatus::Cancelled);
        assert!(cancelled.cancel().is_err());
    }

    #[test]
    fn test_is_active_covers_non_terminal_states() {
        assert!(AssignmentStatus::Scheduled.is_active());
        assert!(AssignmentStatus::InProgress.is_active());
        assert!(!AssignmentStatus::Completed.is_active());
        assert!(!AssignmentStatus::Cancelled.is_active());
    }

    #[test]
    fn test_assignment_serialization_skips_empty_actuals() {
        let assignment = create_test_assignment(AssignmentStatus::Scheduled);
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(!json.contains("actual_start"));

        let deserialized: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(assignment, deserialized);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
