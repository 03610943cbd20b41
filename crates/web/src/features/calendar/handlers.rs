use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarQuery {
    /// Window year; defaults to the current year
    pub year: Option<i32>,
    /// Window month (1-12); defaults to the current month
    pub month: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Calendar entries for the window; empty when the provider has none or is unreachable")
    ),
    tag = "calendar"
)]
pub async fn list_calendar_events(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Json<Vec<serde_json::Value>> {
    let now = Utc::now();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());

    Json(state.calendar.list_events(year, month).await)
}
