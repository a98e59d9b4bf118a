//! Time parsing and interval math.
//!
//! All scheduling decisions reduce to minutes-since-midnight arithmetic
//! over half-open intervals. Fractional hours are represented as
//! [`Decimal`] so daily totals compare exactly against the configured cap.

use rust_decimal::Decimal;

use crate::error::{ScheduleError, ScheduleResult};

/// Parses a 24-hour `HH:MM` time string into minutes since midnight.
///
/// The hour may be one or two digits (0–23); the minute must be exactly
/// two digits (00–59). Anything else is rejected.
///
/// # Examples
///
/// ```
/// use fleet_scheduler::scheduling::to_minutes;
///
/// assert_eq!(to_minutes("06:30").unwrap(), 390);
/// assert_eq!(to_minutes("0:00").unwrap(), 0);
/// assert!(to_minutes("24:00").is_err());
/// assert!(to_minutes("8:5").is_err());
/// ```
pub fn to_minutes(time: &str) -> ScheduleResult<u32> {
    let invalid = || ScheduleError::InvalidTimeFormat {
        value: time.to_string(),
    };

    let (hour_part, minute_part) = time.split_once(':').ok_or_else(invalid)?;

    let hour_ok = (1..=2).contains(&hour_part.len())
        && hour_part.bytes().all(|b| b.is_ascii_digit());
    let minute_ok = minute_part.len() == 2 && minute_part.bytes().all(|b| b.is_ascii_digit());
    if !hour_ok || !minute_ok {
        return Err(invalid());
    }

    let hours: u32 = hour_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = minute_part.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Computes the duration between two `HH:MM` times as fractional hours.
///
/// The result is `(end - start) / 60` and may be zero or negative when
/// the end does not come after the start. Callers decide whether a
/// non-positive duration is a validation failure; nothing is clamped
/// here.
///
/// Minute counts not divisible by three have no exact decimal
/// representation in hours (4 minutes is 0.0666…), so the quotient is
/// carried at full [`Decimal`] precision and `(hours * 60).round()`
/// always recovers the exact minute count. Consumers that need whole
/// minutes round at the point of use, as [`format_duration`] does.
///
/// # Examples
///
/// ```
/// use fleet_scheduler::scheduling::duration_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(duration_hours("06:00", "14:00").unwrap(), Decimal::from(8));
/// assert_eq!(duration_hours("09:00", "16:30").unwrap(), Decimal::new(75, 1));
/// assert!(duration_hours("14:00", "06:00").unwrap() < Decimal::ZERO);
/// ```
pub fn duration_hours(start: &str, end: &str) -> ScheduleResult<Decimal> {
    let start_minutes = to_minutes(start)?;
    let end_minutes = to_minutes(end)?;
    let delta = i64::from(end_minutes) - i64::from(start_minutes);
    Ok(Decimal::from(delta) / Decimal::from(60))
}

/// Tests whether two half-open intervals overlap.
///
/// Both intervals are given as start minute plus duration in minutes.
/// Intervals that merely touch at an endpoint do not overlap.
///
/// # Examples
///
/// ```
/// use fleet_scheduler::scheduling::intervals_overlap;
///
/// // 08:00-09:00 and 09:00-10:00 touch but do not overlap
/// assert!(!intervals_overlap(480, 60, 540, 60));
/// // 08:00-10:00 and 09:00-10:00 overlap
/// assert!(intervals_overlap(480, 120, 540, 60));
/// ```
pub fn intervals_overlap(
    start_a_min: i64,
    duration_a_min: i64,
    start_b_min: i64,
    duration_b_min: i64,
) -> bool {
    let end_a = start_a_min + duration_a_min;
    let end_b = start_b_min + duration_b_min;
    start_a_min < end_b && end_a > start_b_min
}

/// Formats fractional hours as `"Xh"` or `"Xh Ym"`.
///
/// The minute remainder is `round(frac(hours) * 60)`; when it rounds to
/// zero the minutes part is omitted.
///
/// # Examples
///
/// ```
/// use fleet_scheduler::scheduling::format_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_duration(Decimal::from(8)), "8h");
/// assert_eq!(format_duration(Decimal::new(75, 1)), "7h 30m");
/// ```
pub fn format_duration(hours: Decimal) -> String {
    let whole = hours.trunc();
    let minutes = ((hours - whole) * Decimal::from(60)).round();

    if minutes.is_zero() {
        format!("{}h", whole.normalize())
    } else {
        format!("{}h {}m", whole.normalize(), minutes.normalize())
    }
}
