//! Journey progress tracking and threshold alerts.
//!
//! The tracker turns a driver's journey for the day plus a wall-clock
//! reading into progress figures and at most one alert. Alerts are
//! re-evaluated on every call; the tracker remembers the last alert
//! signature per driver so callers only notify on fresh emissions.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::AlertConfig;
use crate::models::Journey;

/// The kind of alert raised for a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// The journey has not started and its start is at most the
    /// configured warning window away.
    AboutToStart,
    /// The worked time has consumed the full daily allotment.
    LimitReached,
    /// The remaining time is within the configured warning window.
    LimitApproaching,
}

/// How urgent an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Advisory, no regulation at stake yet.
    Warning,
    /// The driver must act to stay within regulation.
    Critical,
}

/// A single alert derived from journey state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyAlert {
    /// What triggered the alert.
    pub kind: AlertKind,
    /// Urgency of the alert.
    pub severity: AlertSeverity,
    /// Short headline.
    pub title: String,
    /// Full message shown to the driver.
    pub message: String,
}

impl JourneyAlert {
    /// Returns the dedup signature for this alert.
    pub fn signature(&self) -> String {
        format!("{}-{}", self.title, self.message)
    }
}

/// Progress figures for a tracked journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyProgress {
    /// Minutes until the scheduled start, floored; negative once the
    /// scheduled start has passed.
    pub minutes_until_start: i64,
    /// Total allotted minutes for the day.
    pub total_minutes: i64,
    /// Minutes worked so far.
    pub worked_minutes: i64,
    /// Allotted minus worked; negative once the allotment is exceeded.
    pub remaining_minutes: i64,
    /// Worked over total, in `[0, 1]` for journeys within their
    /// allotment. Zero when nothing is allotted.
    pub progress_ratio: Decimal,
}

/// The tracker's answer for one driver on one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JourneyView {
    /// The driver has no journey today. Not an error.
    NoJourneyToday,
    /// The driver has a journey; progress and the active alert, if any.
    Tracked {
        /// Computed progress figures.
        progress: JourneyProgress,
        /// The alert active right now, re-reported on every call.
        alert: Option<JourneyAlert>,
        /// True only when `alert` carries a signature the tracker has
        /// not reported for this journey yet.
        fresh_alert: bool,
    },
}

/// Stateful journey evaluator.
///
/// One tracker serves all drivers; it keeps the last alert signature
/// seen per driver and day so a persisting condition is flagged fresh
/// exactly once. The memory resets when the alert clears or the
/// driver's journey moves to another date.
#[derive(Debug)]
pub struct JourneyTracker {
    start_warning_minutes: i64,
    cap_warning_minutes: i64,
    last_signatures: HashMap<String, (NaiveDate, String)>,
}

impl JourneyTracker {
    /// Creates a tracker with thresholds from configuration.
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            start_warning_minutes: i64::from(config.start_warning_minutes),
            cap_warning_minutes: i64::from(config.cap_warning_minutes),
            last_signatures: HashMap::new(),
        }
    }

    /// Evaluates a driver's journey at the given instant.
    ///
    /// Passing `None` for the journey yields
    /// [`JourneyView::NoJourneyToday`] and clears any remembered alert
    /// for the driver.
    pub fn evaluate(
        &mut self,
        driver_id: &str,
        journey: Option<&Journey>,
        now: NaiveDateTime,
    ) -> JourneyView {
        let Some(journey) = journey else {
            self.last_signatures.remove(driver_id);
            return JourneyView::NoJourneyToday;
        };

        let progress = compute_progress(journey, now);
        let alert = self.derive_alert(journey, &progress);

        let fresh_alert = match &alert {
            Some(alert) => {
                let signature = alert.signature();
                let previous = self.last_signatures.get(driver_id);
                let seen = matches!(
                    previous,
                    Some((date, sig)) if *date == journey.date && *sig == signature
                );
                self.last_signatures
                    .insert(driver_id.to_string(), (journey.date, signature));
                !seen
            }
            None => {
                self.last_signatures.remove(driver_id);
                false
            }
        };

        JourneyView::Tracked {
            progress,
            alert,
            fresh_alert,
        }
    }

    fn derive_alert(&self, journey: &Journey, progress: &JourneyProgress) -> Option<JourneyAlert> {
        if !journey.is_active
            && (0..=self.start_warning_minutes).contains(&progress.minutes_until_start)
        {
            let message = if progress.minutes_until_start == 0 {
                "Your journey starts right now. Head to the departure point to avoid delays."
                    .to_string()
            } else {
                format!(
                    "Head to your work site and start your journey within the next {} minutes.",
                    progress.minutes_until_start
                )
            };
            return Some(JourneyAlert {
                kind: AlertKind::AboutToStart,
                severity: AlertSeverity::Warning,
                title: "Your journey is about to start!".to_string(),
                message,
            });
        }

        let worked = format_worked(journey);

        if progress.remaining_minutes <= 0 {
            return Some(JourneyAlert {
                kind: AlertKind::LimitReached,
                severity: AlertSeverity::Critical,
                title: "Daily journey limit reached!".to_string(),
                message: format!(
                    "You have worked {}. You must end your journey immediately to comply with current regulations.",
                    worked
                ),
            });
        }

        if progress.remaining_minutes <= self.cap_warning_minutes {
            return Some(JourneyAlert {
                kind: AlertKind::LimitApproaching,
                severity: AlertSeverity::Critical,
                title: "Daily journey limit is close!".to_string(),
                message: format!(
                    "You have worked {}. You must wrap up your journey immediately.",
                    worked
                ),
            });
        }

        None
    }
}

fn compute_progress(journey: &Journey, now: NaiveDateTime) -> JourneyProgress {
    // floor, not truncation: -90 seconds until start is -2 minutes
    let until_start_seconds = (journey.scheduled_start() - now).num_seconds();
    let minutes_until_start = until_start_seconds.div_euclid(60);

    let total_minutes = (journey.total_hours * Decimal::from(60))
        .round()
        .to_i64()
        .unwrap_or(0);
    let worked_minutes = journey.worked_total_minutes();
    let remaining_minutes = total_minutes - worked_minutes;

    let progress_ratio = if total_minutes > 0 {
        Decimal::from(worked_minutes) / Decimal::from(total_minutes)
    } else {
        Decimal::ZERO
    };

    JourneyProgress {
        minutes_until_start,
        total_minutes,
        worked_minutes,
        remaining_minutes,
        progress_ratio,
    }
}

fn format_worked(journey: &Journey) -> String {
    if journey.worked_minutes == 0 {
        format!("{}h", journey.worked_hours)
    } else {
        format!("{}h {}m", journey.worked_hours, journey.worked_minutes)
    }
}
