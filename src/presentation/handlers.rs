// HTTP request handlers
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::domain::measurement::Quantity;
use crate::presentation::app_state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard summary: station marker, whole-dataset averages, selectable dates
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard_service.summary())
}

/// Full prediction series for one quantity, as line-chart input
pub async fn get_series(
    Path(quantity): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match Quantity::from_slug(&quantity) {
        Some(quantity) => Json(state.dashboard_service.chart_series(quantity)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("unknown quantity '{quantity}'"),
        )
            .into_response(),
    }
}

/// Merged records for one selected day. A day without data is an empty list,
/// not an error; only a malformed date is rejected.
pub async fn get_daily_view(
    Path(date): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
        Ok(day) => Json(state.daily_view_service.daily_view(day)).into_response(),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            format!("invalid date '{date}', expected YYYY-MM-DD"),
        )
            .into_response(),
    }
}
