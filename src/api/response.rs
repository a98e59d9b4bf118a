//! Response types for the fleet scheduler API.
//!
//! This module defines the error response structures and the mapping
//! from domain errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ScheduleError> for ApiErrorResponse {
    fn from(error: ScheduleError) -> Self {
        let message = error.to_string();
        match error {
            ScheduleError::ConfigNotFound { .. } | ScheduleError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            ScheduleError::DriverNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("DRIVER_NOT_FOUND", message),
            },
            ScheduleError::RouteNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ROUTE_NOT_FOUND", message),
            },
            ScheduleError::TemplateNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("TEMPLATE_NOT_FOUND", message),
            },
            ScheduleError::AssignmentNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ASSIGNMENT_NOT_FOUND", message),
            },
            ScheduleError::ShiftCrossesMidnight { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("SHIFT_CROSSES_MIDNIGHT", message),
            },
            ScheduleError::SchedulingConflict => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("SCHEDULING_CONFLICT", message),
            },
            ScheduleError::InvalidTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("INVALID_TRANSITION", message),
            },
            ScheduleError::DailyHourCapExceeded { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("DAILY_HOUR_CAP_EXCEEDED", message),
            },
            ScheduleError::InvalidTimeFormat { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TIME_FORMAT", message),
            },
            ScheduleError::DriverInactive { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DRIVER_INACTIVE", message),
            },
            ScheduleError::InvalidTemplate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TEMPLATE", message),
            },
            ScheduleError::PlanningError { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("PLANNING_ERROR", message),
            },
        }
    }
}

/// Response body for a successful validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Same-day total including the candidate.
    pub projected_total_hours: Decimal,
    /// The projected total rendered for display, e.g. "7h 30m".
    pub formatted_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_conflict_maps_to_409_with_fixed_message() {
        let response: ApiErrorResponse = ScheduleError::SchedulingConflict.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(
            response.error.message,
            "driver or route already occupied in the requested window"
        );
    }

    #[test]
    fn test_cap_exceeded_maps_to_422() {
        let response: ApiErrorResponse = ScheduleError::DailyHourCapExceeded {
            total_hours: Decimal::from(8),
            cap_hours: Decimal::from_str("7.5").unwrap(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "DAILY_HOUR_CAP_EXCEEDED");
    }

    #[test]
    fn test_shift_crosses_midnight_maps_to_400() {
        let response: ApiErrorResponse = ScheduleError::ShiftCrossesMidnight {
            start_time: chrono::NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            duration_minutes: 360,
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "SHIFT_CROSSES_MIDNIGHT");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = ScheduleError::DriverNotFound {
            driver_id: "drv_042".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_transition_maps_to_409() {
        let response: ApiErrorResponse = ScheduleError::InvalidTransition {
            assignment_id: "asg_001".to_string(),
            message: "only scheduled assignments can be started".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }
}
