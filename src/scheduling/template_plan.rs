//! Shift template validation and week planning.
//!
//! Template creation enforces the roster rules: window direction, the
//! configured shift-length bounds, week 1–52. Week planning carves an
//! operating window into consecutive full-length shifts replicated
//! across all seven weekdays, the way dispatchers build a standard
//! route roster.

use chrono::{Duration, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SchedulingConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::ShiftTemplate;

/// Shift length used by the automatic week planner, in hours.
const PLANNED_SHIFT_HOURS: i64 = 8;

/// The seven weekdays in roster order.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One shift produced by the week planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedShift {
    /// Day of week.
    pub day: Weekday,
    /// Shift start.
    pub start_time: NaiveTime,
    /// Shift end.
    pub end_time: NaiveTime,
    /// Shift length in hours.
    pub duration_hours: u32,
}

/// The outcome of planning a week of shifts for one operating window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Shifts per day carved from the window.
    pub shifts_per_day: u32,
    /// Total shifts across the seven days.
    pub total_shifts: u32,
    /// The planned shifts for every weekday.
    pub shifts: Vec<PlannedShift>,
    /// Present when the window does not divide into full shifts; names
    /// the uncovered minutes and the window end that would.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leftover_warning: Option<String>,
}

/// Validates the fields of a proposed shift template.
///
/// Shift-length bounds come from [`SchedulingConfig`], so a deployment
/// that allows longer or shorter shifts only edits its YAML.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTemplate`] naming the offending field
/// when the end does not come strictly after the start, the duration
/// falls outside the configured `min_shift_hours`/`max_shift_hours`
/// bounds, or the week number is outside 1–52.
pub fn validate_template(
    start_time: NaiveTime,
    end_time: NaiveTime,
    week_number: u32,
    limits: &SchedulingConfig,
) -> ScheduleResult<()> {
    if end_time <= start_time {
        return Err(ScheduleError::InvalidTemplate {
            field: "end_time".to_string(),
            message: "end time must be after start time".to_string(),
        });
    }

    let minutes = Decimal::from((end_time - start_time).num_minutes());
    let sixty = Decimal::from(60);
    if minutes > limits.max_shift_hours * sixty {
        return Err(ScheduleError::InvalidTemplate {
            field: "end_time".to_string(),
            message: format!(
                "shift cannot exceed {} hours",
                limits.max_shift_hours.normalize()
            ),
        });
    }
    if minutes < limits.min_shift_hours * sixty {
        return Err(ScheduleError::InvalidTemplate {
            field: "end_time".to_string(),
            message: format!(
                "shift must be at least {} hour",
                limits.min_shift_hours.normalize()
            ),
        });
    }

    if !(1..=52).contains(&week_number) {
        return Err(ScheduleError::InvalidTemplate {
            field: "week_number".to_string(),
            message: "week number must be between 1 and 52".to_string(),
        });
    }

    Ok(())
}

/// Plans a week of full 8-hour shifts inside a daily operating window.
///
/// The window is carved front to back into consecutive 8-hour shifts;
/// each resulting shift recurs on all seven weekdays. Leftover minutes
/// that cannot form a full shift are reported as a warning rather than
/// silently dropped.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidTemplate`] when the window is not
/// strictly forward, and [`ScheduleError::PlanningError`] when it is too
/// short to hold even one full shift.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use fleet_scheduler::scheduling::plan_week;
///
/// let plan = plan_week(
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
/// ).unwrap();
/// assert_eq!(plan.shifts_per_day, 2);
/// assert_eq!(plan.total_shifts, 14);
/// assert!(plan.leftover_warning.is_none());
/// ```
pub fn plan_week(window_start: NaiveTime, window_end: NaiveTime) -> ScheduleResult<WeekPlan> {
    if window_end <= window_start {
        return Err(ScheduleError::InvalidTemplate {
            field: "window".to_string(),
            message: "window start must be before window end".to_string(),
        });
    }

    let total_minutes = (window_end - window_start).num_minutes();
    let shift_minutes = PLANNED_SHIFT_HOURS * 60;
    let shifts_per_day = (total_minutes / shift_minutes) as u32;
    let leftover_minutes = total_minutes % shift_minutes;

    if shifts_per_day == 0 {
        return Err(ScheduleError::PlanningError {
            message: "operating window must allow at least one full 8-hour shift".to_string(),
        });
    }

    let mut shifts = Vec::with_capacity((shifts_per_day * 7) as usize);
    for day in WEEK {
        let mut shift_start = window_start;
        for _ in 0..shifts_per_day {
            let shift_end = shift_start + Duration::hours(PLANNED_SHIFT_HOURS);
            shifts.push(PlannedShift {
                day,
                start_time: shift_start,
                end_time: shift_end,
                duration_hours: PLANNED_SHIFT_HOURS as u32,
            });
            shift_start = shift_end;
        }
    }

    let leftover_warning = (leftover_minutes > 0).then(|| {
        let covered_end = window_start + Duration::minutes(shifts_per_day as i64 * shift_minutes);
        format!(
            "{} minutes of the window ({} - {}) are left uncovered; end the window at {} for full shifts only",
            leftover_minutes,
            covered_end.format("%H:%M"),
            window_end.format("%H:%M"),
            covered_end.format("%H:%M"),
        )
    });

    Ok(WeekPlan {
        shifts_per_day,
        total_shifts: shifts_per_day * 7,
        shifts,
        leftover_warning,
    })
}

/// Clones every template of a source week onto a target week number.
///
/// The returned templates carry no ids; the caller assigns fresh ones
/// when persisting.
///
/// # Errors
///
/// Returns [`ScheduleError::PlanningError`] when the source week has no
/// templates to copy.
pub fn copy_week(
    templates: &[ShiftTemplate],
    source_week: u32,
    target_week: u32,
) -> ScheduleResult<Vec<ShiftTemplate>> {
    let copied: Vec<ShiftTemplate> = templates
        .iter()
        .filter(|t| t.week_number == source_week)
        .map(|t| ShiftTemplate {
            id: String::new(),
            week_number: target_week,
            ..t.clone()
        })
        .collect();

    if copied.is_empty() {
        return Err(ScheduleError::PlanningError {
            message: format!("no shift templates exist in week {}", source_week),
        });
    }

    Ok(copied)
}
