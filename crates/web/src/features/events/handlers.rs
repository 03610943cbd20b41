use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::event::{CreateEventRequest, EventResponse},
    dto::participant::{AddParticipantRequest, RemoveParticipantRequest},
    models::Participant,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events with their rosters", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(state.db.pool()).await?;

    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created with an empty roster", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Event id already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let event = services::create_event(state.db.pool(), &payload).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event(state.db.pool(), &id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/participants",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Roster ordered by join time, most recent first", body = Vec<Participant>)
    ),
    tag = "events"
)]
pub async fn list_event_participants(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Participant>>, WebError> {
    let participants = services::list_participants(state.db.pool(), &id).await?;

    Ok(Json(participants))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/participants",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    request_body = AddParticipantRequest,
    responses(
        (status = 200, description = "Updated event with the full roster", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn add_event_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddParticipantRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let event =
        services::add_participant(state.db.pool(), &state.notifier, &id, &payload).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}/participants",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    request_body = RemoveParticipantRequest,
    responses(
        (status = 200, description = "Updated event with the remaining roster", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn remove_event_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RemoveParticipantRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let event =
        services::remove_participant(state.db.pool(), &state.notifier, &id, &payload).await?;

    Ok(Json(event).into_response())
}
