//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the fleet
//! scheduling configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ScheduleError, ScheduleResult};

use super::types::{AlertConfig, FleetConfig, SchedulingConfig};

/// Loads and provides access to the fleet configuration.
///
/// # File Structure
///
/// ```text
/// config/fleet/
/// └── scheduling.yaml   # Scheduling limits and alert thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use fleet_scheduler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fleet").unwrap();
/// println!("Daily cap: {}h", loader.scheduling().daily_hour_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FleetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fleet")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let scheduling_path = path.as_ref().join("scheduling.yaml");
        let config = Self::load_yaml::<FleetConfig>(&scheduling_path)?;
        Ok(Self { config })
    }

    /// Builds a loader around the built-in defaults, for tests and
    /// embedded use.
    pub fn with_defaults() -> Self {
        Self {
            config: FleetConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ScheduleResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ScheduleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ScheduleError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the complete configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Returns the scheduling limits.
    pub fn scheduling(&self) -> &SchedulingConfig {
        &self.config.scheduling
    }

    /// Returns the alert thresholds.
    pub fn alerts(&self) -> &AlertConfig {
        &self.config.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/fleet"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.scheduling().daily_hour_cap,
            Decimal::from_str("7.5").unwrap()
        );
        assert_eq!(loader.alerts().start_warning_minutes, 30);
        assert_eq!(loader.alerts().cap_warning_minutes, 30);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(ScheduleError::ConfigNotFound { path }) => {
                assert!(path.contains("scheduling.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_defaults_loader_matches_file() {
        let from_file = ConfigLoader::load(config_path()).unwrap();
        let defaults = ConfigLoader::with_defaults();

        assert_eq!(
            from_file.scheduling().daily_hour_cap,
            defaults.scheduling().daily_hour_cap
        );
        assert_eq!(
            from_file.alerts().cap_warning_minutes,
            defaults.alerts().cap_warning_minutes
        );
    }
}
