//! Scheduling core for a vehicle-fleet admin tool.
//!
//! This crate provides the domain logic behind driver shift scheduling:
//! validating driver-to-route assignments (double-booking detection and
//! daily-hour-cap enforcement) and tracking a driver's journey progress
//! against the regulatory daily limit.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
