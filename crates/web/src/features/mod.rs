pub mod calendar;
pub mod cms;
pub mod events;
pub mod notifications;
pub mod runs;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/events", events::routes::routes())
        .nest("/runs", runs::routes::routes())
        .nest("/calendar", calendar::routes::routes())
        .nest("/cms", cms::routes::routes())
        .nest("/discord-notify", notifications::routes::routes())
}
