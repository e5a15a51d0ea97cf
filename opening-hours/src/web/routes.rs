//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use tower_http::services::ServeDir;
use tracing::error;

use crate::domain::Region;
use crate::holidays::SUPPORTED_YEARS;
use crate::status::StatusResult;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/status", get(status_fragment))
        .route("/api/status", get(api_status))
        .route("/api/holidays", get(api_holidays))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Full page with the current status.
async fn index_page(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let (region, status) = evaluate(&state, &query)?;

    let template = IndexTemplate {
        region: region.to_string(),
        region_name: region.name().map(str::to_string),
        regions: region_options(&region),
        show_schedule: query.show_schedule,
        status: StatusView::from_status(&status),
        schedule: schedule_for(&state, &query),
    };
    render(&template)
}

/// Embeddable status fragment.
async fn status_fragment(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let (_, status) = evaluate(&state, &query)?;

    let template = StatusTemplate {
        status: StatusView::from_status(&status),
        schedule: schedule_for(&state, &query),
    };
    render(&template)
}

/// Current status as JSON.
async fn api_status(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Query(query) = query?;
    let (region, status) = evaluate(&state, &query)?;
    Ok(Json(StatusResponse::from_status(
        &status,
        &region,
        state.hours.timezone,
    )))
}

/// Statutory holidays for a region and year.
async fn api_holidays(
    State(state): State<AppState>,
    query: Result<Query<HolidaysQuery>, QueryRejection>,
) -> Result<Json<HolidaysResponse>, AppError> {
    let Query(query) = query?;
    let region = resolve_region(&state, query.region.as_deref());
    let year = query
        .year
        .unwrap_or_else(|| Utc::now().with_timezone(&state.hours.timezone).year());
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(AppError::BadRequest {
            message: format!(
                "Year {year} out of range {}-{}",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            ),
        });
    }

    Ok(Json(HolidaysResponse::from_set(
        &state.hours.holidays(&region, year),
    )))
}

/// Evaluate the status for a request.
fn evaluate(
    state: &AppState,
    query: &StatusQuery,
) -> Result<(Region, StatusResult<Tz>), AppError> {
    let now = match query.at.as_deref() {
        Some(at) => DateTime::parse_from_rfc3339(at)
            .map_err(|e| AppError::BadRequest {
                message: format!("Invalid instant {at:?}: {e}"),
            })?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let region = resolve_region(state, query.region.as_deref());
    let status = state.hours.status_for_region(&region, now);
    Ok((region, status))
}

/// The requested region, or the configured one when absent or blank.
fn resolve_region(state: &AppState, requested: Option<&str>) -> Region {
    requested
        .map(Region::new)
        .filter(|r| !r.as_str().is_empty())
        .unwrap_or_else(|| state.hours.region.clone())
}

fn schedule_for(state: &AppState, query: &StatusQuery) -> Option<Vec<ScheduleRowView>> {
    query
        .show_schedule
        .then(|| schedule_rows(&state.hours.schedule))
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(status = %status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
