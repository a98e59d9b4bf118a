//! Application state for the fleet scheduler API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, RwLock};

use crate::clock::Clock;
use crate::config::ConfigLoader;
use crate::repository::InMemoryFleetStore;
use crate::scheduling::JourneyTracker;

/// Shared application state.
///
/// Holds the fleet store, the loaded configuration, the clock used for
/// journey tracking, and the stateful alert tracker.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<InMemoryFleetStore>>,
    config: Arc<ConfigLoader>,
    clock: Arc<dyn Clock>,
    tracker: Arc<Mutex<JourneyTracker>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        let tracker = JourneyTracker::new(config.alerts());
        Self {
            store: Arc::new(RwLock::new(InMemoryFleetStore::new())),
            config: Arc::new(config),
            clock,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Returns the fleet store behind its lock.
    pub fn store(&self) -> &RwLock<InMemoryFleetStore> {
        &self.store
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns the journey tracker behind its lock.
    pub fn tracker(&self) -> &Mutex<JourneyTracker> {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_starts_with_empty_store() {
        let state = AppState::new(ConfigLoader::with_defaults(), Arc::new(SystemClock));
        assert!(state.store().read().unwrap().drivers().is_empty());
    }
}
