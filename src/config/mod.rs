//! Configuration loading and management for the fleet scheduler.
//!
//! This module provides functionality to load scheduling limits and
//! alert thresholds from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use fleet_scheduler::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fleet").unwrap();
//! println!("Daily cap: {}h", config.scheduling().daily_hour_cap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AlertConfig, FleetConfig, SchedulingConfig};
