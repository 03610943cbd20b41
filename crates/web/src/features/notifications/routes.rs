use axum::{Router, routing::post};

use super::handlers::send_notification;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(send_notification))
}
