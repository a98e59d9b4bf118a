//! HTTP API module for the fleet scheduler.
//!
//! This module provides the REST endpoints for managing drivers,
//! routes, shift templates, and assignments, and for viewing a
//! driver's journey.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AssignmentRequest, DriverRequest, PreferencesRequest, PreviewRequest, RouteRequest,
    TemplateRequest,
};
pub use response::{ApiError, ValidationResponse};
pub use state::AppState;
