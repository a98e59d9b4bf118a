//! Assignment validation.
//!
//! Decides whether a proposed (driver, route, date, start time) tuple may
//! become a new or edited assignment. The checks run in a fixed order:
//! driver resolution, route resolution, driver-side overlap, route-side
//! overlap, then the daily-hour cap. The first failure wins and nothing
//! is partially applied.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Assignment;
use crate::repository::{AssignmentRepository, DriverRepository, RouteRepository};

use super::time_utils::intervals_overlap;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A proposed assignment, before it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCandidate {
    /// The driver to bind.
    pub driver_id: String,
    /// The route to serve.
    pub route_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The shift start time.
    pub start_time: NaiveTime,
    /// When editing, the id of the assignment being edited so it does not
    /// conflict with itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_assignment_id: Option<String>,
}

/// The result of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// The driver's projected same-day total, candidate included.
    pub projected_total_hours: Decimal,
}

/// Validates a candidate assignment against the existing schedule.
///
/// # Arguments
///
/// * `candidate` - The proposed (driver, route, date, start time) tuple
/// * `drivers` / `routes` / `assignments` - Repository handles
/// * `daily_cap_hours` - The configured daily hour cap (7.5 by default)
///
/// # Errors
///
/// In check order:
/// - [`ScheduleError::DriverNotFound`] / [`ScheduleError::DriverInactive`]
/// - [`ScheduleError::RouteNotFound`]
/// - [`ScheduleError::ShiftCrossesMidnight`] when the start time plus the
///   route duration does not end before midnight of the same day.
/// - [`ScheduleError::SchedulingConflict`] when the candidate window
///   overlaps any active same-date assignment of the driver or the route.
///   Driver-side and route-side conflicts deliberately share one message.
/// - [`ScheduleError::DailyHourCapExceeded`] when the driver's same-day
///   total, candidate included, would exceed the cap. Carries the
///   computed total for display.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use fleet_scheduler::models::{Driver, DriverStatus, Route};
/// use fleet_scheduler::repository::InMemoryFleetStore;
/// use fleet_scheduler::scheduling::{AssignmentCandidate, validate_assignment};
/// use rust_decimal::Decimal;
///
/// let mut store = InMemoryFleetStore::new();
/// store.upsert_driver(Driver {
///     id: "drv_001".to_string(),
///     first_name: "Laura".to_string(),
///     last_name: "Gomez".to_string(),
///     license_number: "1020304050".to_string(),
///     email: "laura.gomez@example.com".to_string(),
///     status: DriverStatus::Active,
/// });
/// store.upsert_route(Route {
///     id: "rt_001".to_string(),
///     name: "Norte Express".to_string(),
///     origin: "Terminal Norte".to_string(),
///     destination: "Terminal Sur".to_string(),
///     duration_minutes: 360,
/// });
///
/// let candidate = AssignmentCandidate {
///     driver_id: "drv_001".to_string(),
///     route_id: "rt_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
///     start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     exclude_assignment_id: None,
/// };
///
/// let outcome = validate_assignment(
///     &candidate,
///     &store,
///     &store,
///     &store,
///     Decimal::new(75, 1),
/// ).unwrap();
/// assert_eq!(outcome.projected_total_hours, Decimal::from(6));
/// ```
pub fn validate_assignment(
    candidate: &AssignmentCandidate,
    drivers: &dyn DriverRepository,
    routes: &dyn RouteRepository,
    assignments: &dyn AssignmentRepository,
    daily_cap_hours: Decimal,
) -> ScheduleResult<ValidationOutcome> {
    let driver =
        drivers
            .find_driver(&candidate.driver_id)
            .ok_or_else(|| ScheduleError::DriverNotFound {
                driver_id: candidate.driver_id.clone(),
            })?;
    if !driver.is_active() {
        return Err(ScheduleError::DriverInactive {
            driver_id: driver.id,
        });
    }

    let route =
        routes
            .find_route(&candidate.route_id)
            .ok_or_else(|| ScheduleError::RouteNotFound {
                route_id: candidate.route_id.clone(),
            })?;

    let candidate_start = (candidate.start_time - NaiveTime::MIN).num_minutes();
    let candidate_duration = i64::from(route.duration_minutes);

    // The schedule is per calendar day and end times are plain times of
    // day, so the window must end before midnight. A wrapped end time
    // would corrupt both the overlap scan and the daily total.
    if candidate_start + candidate_duration >= MINUTES_PER_DAY {
        return Err(ScheduleError::ShiftCrossesMidnight {
            start_time: candidate.start_time,
            duration_minutes: route.duration_minutes,
        });
    }

    let driver_day = active_day_set(
        assignments.find_by_driver_and_date(&candidate.driver_id, candidate.date),
        candidate.exclude_assignment_id.as_deref(),
    );
    check_overlaps(candidate_start, candidate_duration, &driver_day)?;

    let route_day = active_day_set(
        assignments.find_by_route_and_date(&candidate.route_id, candidate.date),
        candidate.exclude_assignment_id.as_deref(),
    );
    check_overlaps(candidate_start, candidate_duration, &route_day)?;

    // The cap applies to the driver's day only; route occupancy does not
    // count against it. Summing in minutes and dividing once keeps the
    // total exact for minute-granular shifts.
    let existing_minutes: i64 = driver_day.iter().map(Assignment::duration_minutes).sum();
    let projected_total_hours =
        (Decimal::from(existing_minutes + candidate_duration) / Decimal::from(60)).normalize();
    if projected_total_hours > daily_cap_hours {
        return Err(ScheduleError::DailyHourCapExceeded {
            total_hours: projected_total_hours,
            cap_hours: daily_cap_hours,
        });
    }

    Ok(ValidationOutcome {
        projected_total_hours,
    })
}

/// Filters a day's assignments down to the ones that still occupy the
/// schedule: non-terminal states, minus the assignment being edited.
fn active_day_set(day: Vec<Assignment>, exclude_id: Option<&str>) -> Vec<Assignment> {
    day.into_iter()
        .filter(|a| a.status.is_active())
        .filter(|a| exclude_id != Some(a.id.as_str()))
        .collect()
}

fn check_overlaps(
    candidate_start: i64,
    candidate_duration: i64,
    existing: &[Assignment],
) -> ScheduleResult<()> {
    for assignment in existing {
        if intervals_overlap(
            candidate_start,
            candidate_duration,
            assignment.start_minutes(),
            assignment.duration_minutes(),
        ) {
            return Err(ScheduleError::SchedulingConflict);
        }
    }
    Ok(())
}
