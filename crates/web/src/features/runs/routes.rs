use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{
    add_run_participant, create_run, get_run, list_run_participants, list_runs,
    remove_run_participant,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_runs))
        .route("/", post(create_run))
        .route("/:id", get(get_run))
        .route("/:id/participants", get(list_run_participants))
        .route("/:id/participants", post(add_run_participant))
        .route("/:id/participants", delete(remove_run_participant))
}
