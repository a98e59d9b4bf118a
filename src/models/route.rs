//! Route model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a transport route served by the fleet.
///
/// The nominal duration is what the assignment validator uses to compute
/// the occupied window of a candidate assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier for the route.
    pub id: String,
    /// Human-readable route name.
    pub name: String,
    /// Origin terminal.
    pub origin: String,
    /// Destination terminal.
    pub destination: String,
    /// Nominal driving duration in minutes.
    pub duration_minutes: u32,
}

impl Route {
    /// Returns the nominal duration as fractional hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleet_scheduler::models::Route;
    /// use rust_decimal::Decimal;
    ///
    /// let route = Route {
    ///     id: "rt_001".to_string(),
    ///     name: "Norte Express".to_string(),
    ///     origin: "Terminal Norte".to_string(),
    ///     destination: "Terminal Sur".to_string(),
    ///     duration_minutes: 90,
    /// };
    /// assert_eq!(route.duration_hours(), Decimal::new(15, 1)); // 1.5
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration_minutes) / Decimal::from(60)
    }

    /// Returns a display label of the form "Origin → Destination".
    pub fn corridor(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
