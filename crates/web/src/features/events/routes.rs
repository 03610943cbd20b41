use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{
    add_event_participant, create_event, get_event, list_event_participants, list_events,
    remove_event_participant,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/", post(create_event))
        .route("/:id", get(get_event))
        .route("/:id/participants", get(list_event_participants))
        .route("/:id/participants", post(add_event_participant))
        .route("/:id/participants", delete(remove_event_participant))
}
