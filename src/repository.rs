//! Repository interfaces and the in-memory store.
//!
//! The validator and tracker never touch storage directly; they receive
//! repository handles with explicit query methods. [`InMemoryFleetStore`]
//! is the HashMap-backed implementation used by the API state and tests.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{
    Assignment, Driver, NotificationPreferences, Route, ShiftTemplate,
};

/// Read-only driver lookup.
pub trait DriverRepository {
    /// Finds a driver by id.
    fn find_driver(&self, driver_id: &str) -> Option<Driver>;
}

/// Read-only route lookup.
pub trait RouteRepository {
    /// Finds a route by id.
    fn find_route(&self, route_id: &str) -> Option<Route>;
}

/// Read-only assignment queries used for conflict detection.
///
/// Implementations return assignments in every lifecycle state; the
/// validator filters out terminal ones itself.
pub trait AssignmentRepository {
    /// Returns all assignments for a driver on a calendar date.
    fn find_by_driver_and_date(&self, driver_id: &str, date: NaiveDate) -> Vec<Assignment>;

    /// Returns all assignments for a route on a calendar date.
    fn find_by_route_and_date(&self, route_id: &str, date: NaiveDate) -> Vec<Assignment>;
}

/// In-memory fleet data store.
///
/// Backs the HTTP API and the test suites. All collections are keyed by
/// entity id; there is no shared global state, callers own the store and
/// wrap it in whatever synchronization they need.
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    drivers: HashMap<String, Driver>,
    routes: HashMap<String, Route>,
    templates: HashMap<String, ShiftTemplate>,
    assignments: HashMap<String, Assignment>,
    preferences: HashMap<String, NotificationPreferences>,
}

impl InMemoryFleetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a driver.
    pub fn upsert_driver(&mut self, driver: Driver) {
        self.drivers.insert(driver.id.clone(), driver);
    }

    /// Inserts or replaces a route.
    pub fn upsert_route(&mut self, route: Route) {
        self.routes.insert(route.id.clone(), route);
    }

    /// Inserts or replaces a shift template.
    pub fn upsert_template(&mut self, template: ShiftTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    /// Inserts or replaces an assignment.
    pub fn upsert_assignment(&mut self, assignment: Assignment) {
        self.assignments.insert(assignment.id.clone(), assignment);
    }

    /// Returns a shift template by id.
    pub fn template(&self, template_id: &str) -> Option<&ShiftTemplate> {
        self.templates.get(template_id)
    }

    /// Returns an assignment by id.
    pub fn assignment(&self, assignment_id: &str) -> Option<&Assignment> {
        self.assignments.get(assignment_id)
    }

    /// Returns a mutable assignment by id, for lifecycle transitions.
    pub fn assignment_mut(&mut self, assignment_id: &str) -> Option<&mut Assignment> {
        self.assignments.get_mut(assignment_id)
    }

    /// Returns all drivers, unordered.
    pub fn drivers(&self) -> Vec<Driver> {
        self.drivers.values().cloned().collect()
    }

    /// Returns all routes, unordered.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.values().cloned().collect()
    }

    /// Returns all assignments, unordered.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.assignments.values().cloned().collect()
    }

    /// Returns a driver's notification preferences, defaulting both
    /// channels on when none were saved.
    pub fn preferences(&self, driver_id: &str) -> NotificationPreferences {
        self.preferences
            .get(driver_id)
            .copied()
            .unwrap_or_default()
    }

    /// Saves a driver's notification preferences.
    pub fn set_preferences(&mut self, driver_id: &str, prefs: NotificationPreferences) {
        self.preferences.insert(driver_id.to_string(), prefs);
    }
}

impl DriverRepository for InMemoryFleetStore {
    fn find_driver(&self, driver_id: &str) -> Option<Driver> {
        self.drivers.get(driver_id).cloned()
    }
}

impl RouteRepository for InMemoryFleetStore {
    fn find_route(&self, route_id: &str) -> Option<Route> {
        self.routes.get(route_id).cloned()
    }
}

impl AssignmentRepository for InMemoryFleetStore {
    fn find_by_driver_and_date(&self, driver_id: &str, date: NaiveDate) -> Vec<Assignment> {
        self.assignments
            .values()
            .filter(|a| a.driver_id == driver_id && a.date == date)
            .cloned()
            .collect()
    }

    fn find_by_route_and_date(&self, route_id: &str, date: NaiveDate) -> Vec<Assignment> {
        self.assignments
            .values()
            .filter(|a| a.route_id == route_id && a.date == date)
            .cloned()
            .collect()
    }
}
