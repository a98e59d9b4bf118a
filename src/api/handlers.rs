//! HTTP request handlers for the fleet scheduler API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{
    Assignment, AssignmentStatus, Driver, Journey, NotificationPreferences, Route, ShiftTemplate,
};
use crate::repository::{AssignmentRepository, DriverRepository, RouteRepository};
use crate::scheduling::{
    AssignmentCandidate, format_duration, plan_week, to_minutes, validate_assignment,
    validate_template,
};

use super::request::{
    AssignmentRequest, DriverRequest, PreferencesRequest, PreviewRequest, RouteRequest,
    TemplateRequest,
};
use super::response::{ApiError, ApiErrorResponse, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/drivers", post(create_driver).get(list_drivers))
        .route("/routes", post(create_route).get(list_routes))
        .route("/shift-templates", post(create_template))
        .route("/shift-templates/preview", post(preview_week))
        .route("/assignments/validate", post(validate_handler))
        .route("/assignments", post(create_assignment).get(list_assignments))
        .route("/assignments/:id/start", post(start_assignment))
        .route("/assignments/:id/finish", post(finish_assignment))
        .route("/assignments/:id/cancel", post(cancel_assignment))
        .route("/drivers/:id/journey", get(driver_journey))
        .route(
            "/drivers/:id/notification-preferences",
            get(get_preferences).put(put_preferences),
        )
        .with_state(state)
}

/// Parses an `HH:MM` request field into a [`NaiveTime`].
fn parse_time(value: &str) -> ScheduleResult<NaiveTime> {
    let minutes = to_minutes(value)?;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).ok_or_else(|| {
        ScheduleError::InvalidTimeFormat {
            value: value.to_string(),
        }
    })
}

fn domain_error(error: ScheduleError) -> axum::response::Response {
    let response: ApiErrorResponse = error.into();
    response.into_response()
}

/// Handler for POST /drivers.
async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<DriverRequest>,
) -> impl IntoResponse {
    let driver = Driver {
        id: request.id,
        first_name: request.first_name,
        last_name: request.last_name,
        license_number: request.license_number,
        email: request.email,
        status: request.status,
    };
    info!(driver_id = %driver.id, "Registering driver");

    let mut store = state.store().write().expect("store lock poisoned");
    store.upsert_driver(driver.clone());
    (StatusCode::CREATED, Json(driver))
}

/// Handler for GET /drivers.
async fn list_drivers(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().expect("store lock poisoned");
    Json(store.drivers())
}

/// Handler for POST /routes.
async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> impl IntoResponse {
    let route = Route {
        id: request.id,
        name: request.name,
        origin: request.origin,
        destination: request.destination,
        duration_minutes: request.duration_minutes,
    };
    info!(
        route_id = %route.id,
        corridor = %route.corridor(),
        duration = %format_duration(route.duration_hours()),
        "Registering route"
    );

    let mut store = state.store().write().expect("store lock poisoned");
    store.upsert_route(route.clone());
    (StatusCode::CREATED, Json(route))
}

/// Handler for GET /routes.
async fn list_routes(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().expect("store lock poisoned");
    Json(store.routes())
}

/// Handler for POST /shift-templates.
///
/// Validates the template window and week number before storing.
async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateRequest>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let (start_time, end_time) = match parse_time(&request.start_time)
        .and_then(|s| parse_time(&request.end_time).map(|e| (s, e)))
    {
        Ok(times) => times,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected template times");
            return domain_error(err);
        }
    };

    if let Err(err) =
        validate_template(start_time, end_time, request.week_number, state.config().scheduling())
    {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected template");
        return domain_error(err);
    }

    let mut store = state.store().write().expect("store lock poisoned");
    if store.find_route(&request.route_id).is_none() {
        return domain_error(ScheduleError::RouteNotFound {
            route_id: request.route_id,
        });
    }

    let template = ShiftTemplate {
        id: format!("tpl_{}", Uuid::new_v4()),
        route_id: request.route_id,
        day: request.day,
        start_time,
        end_time,
        week_number: request.week_number,
        status: request.status,
    };
    info!(
        correlation_id = %correlation_id,
        template_id = %template.id,
        window = %template.schedule_window(),
        "Created shift template"
    );

    store.upsert_template(template.clone());
    (StatusCode::CREATED, Json(template)).into_response()
}

/// Handler for POST /shift-templates/preview.
///
/// Runs the week planner over an operating window without writing
/// anything.
async fn preview_week(
    State(_state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> impl IntoResponse {
    let window = parse_time(&request.window_start)
        .and_then(|s| parse_time(&request.window_end).map(|e| (s, e)));
    let (window_start, window_end) = match window {
        Ok(times) => times,
        Err(err) => return domain_error(err),
    };

    match plan_week(window_start, window_end) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => domain_error(err),
    }
}

/// Handler for POST /assignments/validate.
///
/// Runs the full validation pipeline and reports the projected daily
/// total without persisting anything.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Validating assignment request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Bad payload");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::malformed_json(rejection.body_text())),
            )
                .into_response();
        }
    };

    match run_validation(&state, &request) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                driver_id = %request.driver_id,
                projected_total = %outcome.projected_total_hours,
                "Assignment candidate is valid"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Assignment candidate rejected");
            domain_error(err)
        }
    }
}

/// Handler for POST /assignments.
///
/// Validates, then persists the assignment in `Scheduled` state.
async fn create_assignment(
    State(state): State<AppState>,
    Json(request): Json<AssignmentRequest>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    if let Err(err) = run_validation(&state, &request) {
        warn!(correlation_id = %correlation_id, error = %err, "Assignment rejected");
        return domain_error(err);
    }

    let start_time = match parse_time(&request.start_time) {
        Ok(time) => time,
        Err(err) => return domain_error(err),
    };

    let mut store = state.store().write().expect("store lock poisoned");
    // run_validation proved the route exists
    let Some(route) = store.find_route(&request.route_id) else {
        return domain_error(ScheduleError::RouteNotFound {
            route_id: request.route_id,
        });
    };

    let assignment = Assignment {
        id: format!("asg_{}", Uuid::new_v4()),
        shift_template_id: request.shift_template_id.unwrap_or_default(),
        driver_id: request.driver_id,
        route_id: request.route_id,
        date: request.date,
        start_time,
        end_time: start_time + Duration::minutes(i64::from(route.duration_minutes)),
        status: AssignmentStatus::Scheduled,
        actual_start: None,
        actual_end: None,
    };
    info!(
        correlation_id = %correlation_id,
        assignment_id = %assignment.id,
        driver_id = %assignment.driver_id,
        window = %assignment.schedule_window(),
        "Created assignment"
    );

    store.upsert_assignment(assignment.clone());
    (StatusCode::CREATED, Json(assignment)).into_response()
}

/// Runs the validator for a request against the current store.
fn run_validation(
    state: &AppState,
    request: &AssignmentRequest,
) -> ScheduleResult<ValidationResponse> {
    let candidate = AssignmentCandidate {
        driver_id: request.driver_id.clone(),
        route_id: request.route_id.clone(),
        date: request.date,
        start_time: parse_time(&request.start_time)?,
        exclude_assignment_id: request.exclude_assignment_id.clone(),
    };

    let store = state.store().read().expect("store lock poisoned");
    let cap = state.config().scheduling().daily_hour_cap;
    let outcome = validate_assignment(&candidate, &*store, &*store, &*store, cap)?;

    Ok(ValidationResponse {
        formatted_total: format_duration(outcome.projected_total_hours),
        projected_total_hours: outcome.projected_total_hours,
    })
}

/// Handler for GET /assignments.
async fn list_assignments(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().expect("store lock poisoned");
    Json(store.assignments())
}

/// Handler for POST /assignments/{id}/start.
async fn start_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let now = state.clock().now();
    transition(&state, &id, |assignment| assignment.start(now))
}

/// Handler for POST /assignments/{id}/finish.
async fn finish_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let now = state.clock().now();
    transition(&state, &id, |assignment| assignment.finish(now))
}

/// Handler for POST /assignments/{id}/cancel.
async fn cancel_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    transition(&state, &id, Assignment::cancel)
}

/// Applies a lifecycle transition and returns the updated assignment.
fn transition(
    state: &AppState,
    id: &str,
    apply: impl FnOnce(&mut Assignment) -> ScheduleResult<()>,
) -> axum::response::Response {
    let mut store = state.store().write().expect("store lock poisoned");
    let Some(assignment) = store.assignment_mut(id) else {
        return domain_error(ScheduleError::AssignmentNotFound {
            assignment_id: id.to_string(),
        });
    };

    match apply(assignment) {
        Ok(()) => {
            info!(assignment_id = %id, status = ?assignment.status, "Assignment transitioned");
            Json(assignment.clone()).into_response()
        }
        Err(err) => {
            warn!(assignment_id = %id, error = %err, "Transition rejected");
            domain_error(err)
        }
    }
}

/// Handler for GET /drivers/{id}/journey.
///
/// Derives today's journey from the driver's assignments and runs the
/// tracker over it.
async fn driver_journey(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let now = state.clock().now();

    let journey = {
        let store = state.store().read().expect("store lock poisoned");
        if store.find_driver(&id).is_none() {
            return domain_error(ScheduleError::DriverNotFound { driver_id: id });
        }
        let day = store.find_by_driver_and_date(&id, now.date());
        build_journey(&day, now)
    };

    let mut tracker = state.tracker().lock().expect("tracker lock poisoned");
    let view = tracker.evaluate(&id, journey.as_ref(), now);
    Json(view).into_response()
}

/// Folds a driver's active assignments for a day into one journey.
fn build_journey(day: &[Assignment], now: NaiveDateTime) -> Option<Journey> {
    let active: Vec<&Assignment> = day.iter().filter(|a| a.status.is_active()).collect();
    let first = active.iter().min_by_key(|a| a.start_time)?;

    let total_hours = active.iter().map(|a| a.duration_hours()).sum();
    let worked = active
        .iter()
        .filter_map(|a| a.actual_start)
        .min()
        .map_or(0, |started| (now - started).num_minutes().max(0));

    Some(Journey {
        date: first.date,
        start_time: first.start_time,
        total_hours,
        worked_hours: (worked / 60) as u32,
        worked_minutes: (worked % 60) as u32,
        is_active: active
            .iter()
            .any(|a| a.status == AssignmentStatus::InProgress),
    })
}

/// Handler for GET /drivers/{id}/notification-preferences.
async fn get_preferences(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store().read().expect("store lock poisoned");
    if store.find_driver(&id).is_none() {
        return domain_error(ScheduleError::DriverNotFound { driver_id: id });
    }
    Json(store.preferences(&id)).into_response()
}

/// Handler for PUT /drivers/{id}/notification-preferences.
async fn put_preferences(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PreferencesRequest>,
) -> impl IntoResponse {
    let mut store = state.store().write().expect("store lock poisoned");
    if store.find_driver(&id).is_none() {
        return domain_error(ScheduleError::DriverNotFound { driver_id: id });
    }

    let prefs = NotificationPreferences {
        email: request.email,
        push: request.push,
    };
    store.set_preferences(&id, prefs);
    info!(driver_id = %id, email = prefs.email, push = prefs.push, "Preferences updated");
    Json(prefs).into_response()
}
