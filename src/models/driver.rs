//! Driver model and related types.

use serde::{Deserialize, Serialize};

/// Operational status of a driver.
///
/// Only active drivers may receive new shift assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    /// The driver is available for assignment.
    Active,
    /// The driver is suspended or off roster and cannot be assigned.
    Inactive,
}

/// Represents a driver in the fleet.
///
/// Drivers are created and removed by the admin CRUD surface; the
/// assignment validator only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique identifier for the driver.
    pub id: String,
    /// The driver's first name.
    pub first_name: String,
    /// The driver's last name.
    pub last_name: String,
    /// National id / license number used for lookup in the admin UI.
    pub license_number: String,
    /// Contact email address.
    pub email: String,
    /// Whether the driver is assignable.
    pub status: DriverStatus,
}

impl Driver {
    /// Returns true if the driver can receive new assignments.
    pub fn is_active(&self) -> bool {
        self.status == DriverStatus::Active
    }

    /// Returns the driver's display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleet_scheduler::models::{Driver, DriverStatus};
    ///
    /// let driver = Driver {
    ///     id: "drv_001".to_string(),
    ///     first_name: "Laura".to_string(),
    ///     last_name: "Gomez".to_string(),
    ///     license_number: "1020304050".to_string(),
    ///     email: "laura.gomez@example.com".to_string(),
    ///     status: DriverStatus::Active,
    /// };
    /// assert_eq!(driver.full_name(), "Laura Gomez");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
