//! Configuration types for the fleet scheduler.
//!
//! Strongly-typed structures deserialized from the YAML configuration
//! file. [`FleetConfig::default`] mirrors the shipped file so the core
//! works without one.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Scheduling limits.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    /// Maximum hours a driver may accumulate on one calendar date.
    pub daily_hour_cap: Decimal,
    /// Minimum length of a shift template, in hours.
    pub min_shift_hours: Decimal,
    /// Maximum length of a shift template, in hours.
    pub max_shift_hours: Decimal,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            daily_hour_cap: Decimal::new(75, 1),
            min_shift_hours: Decimal::ONE,
            max_shift_hours: Decimal::from(8),
        }
    }
}

/// Journey alert thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Minutes before the scheduled start at which the countdown
    /// warning begins.
    pub start_warning_minutes: u32,
    /// Remaining minutes under which the cap warning fires.
    pub cap_warning_minutes: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            start_warning_minutes: 30,
            cap_warning_minutes: 30,
        }
    }
}

/// The complete fleet configuration loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetConfig {
    /// Scheduling limits.
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    /// Journey alert thresholds.
    #[serde(default)]
    pub alerts: AlertConfig,
}
