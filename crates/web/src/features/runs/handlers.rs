use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::participant::{AddParticipantRequest, RemoveParticipantRequest},
    dto::run::{CreateRunRequest, RunResponse},
    models::Participant,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/runs",
    responses(
        (status = 200, description = "List all recurring runs with their rosters", body = Vec<RunResponse>)
    ),
    tag = "runs"
)]
pub async fn list_runs(State(state): State<AppState>) -> Result<Json<Vec<RunResponse>>, WebError> {
    let runs = services::list_runs(state.db.pool()).await?;

    Ok(Json(runs))
}

#[utoipa::path(
    post,
    path = "/api/runs",
    request_body = CreateRunRequest,
    responses(
        (status = 201, description = "Run created with an empty roster", body = RunResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Run id already exists")
    ),
    tag = "runs"
)]
pub async fn create_run(
    State(state): State<AppState>,
    Json(payload): Json<CreateRunRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let run = services::create_run(state.db.pool(), &payload).await?;

    Ok((StatusCode::CREATED, Json(run)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/runs/{id}",
    params(
        ("id" = String, Path, description = "Run ID")
    ),
    responses(
        (status = 200, description = "Run found", body = RunResponse),
        (status = 404, description = "Run not found")
    ),
    tag = "runs"
)]
pub async fn get_run(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let run = services::get_run(state.db.pool(), &id).await?;

    Ok(Json(run).into_response())
}

#[utoipa::path(
    get,
    path = "/api/runs/{id}/participants",
    params(
        ("id" = String, Path, description = "Run ID")
    ),
    responses(
        (status = 200, description = "Roster ordered by join time, most recent first", body = Vec<Participant>)
    ),
    tag = "runs"
)]
pub async fn list_run_participants(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Participant>>, WebError> {
    let participants = services::list_participants(state.db.pool(), &id).await?;

    Ok(Json(participants))
}

#[utoipa::path(
    post,
    path = "/api/runs/{id}/participants",
    params(
        ("id" = String, Path, description = "Run ID")
    ),
    request_body = AddParticipantRequest,
    responses(
        (status = 200, description = "Updated run with the full roster", body = RunResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Run not found")
    ),
    tag = "runs"
)]
pub async fn add_run_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddParticipantRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let run = services::add_participant(state.db.pool(), &state.notifier, &id, &payload).await?;

    Ok(Json(run).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/runs/{id}/participants",
    params(
        ("id" = String, Path, description = "Run ID")
    ),
    request_body = RemoveParticipantRequest,
    responses(
        (status = 200, description = "Updated run with the remaining roster", body = RunResponse),
        (status = 404, description = "Run not found")
    ),
    tag = "runs"
)]
pub async fn remove_run_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RemoveParticipantRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let run = services::remove_participant(state.db.pool(), &state.notifier, &id, &payload).await?;

    Ok(Json(run).into_response())
}
