use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use features::calendar::client::CalendarClient;
use features::cms::client::CmsClient;
use features::notifications::notifier::Notifier;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::events::handlers::list_events,
        features::events::handlers::create_event,
        features::events::handlers::get_event,
        features::events::handlers::list_event_participants,
        features::events::handlers::add_event_participant,
        features::events::handlers::remove_event_participant,
        features::runs::handlers::list_runs,
        features::runs::handlers::create_run,
        features::runs::handlers::get_run,
        features::runs::handlers::list_run_participants,
        features::runs::handlers::add_run_participant,
        features::runs::handlers::remove_run_participant,
        features::calendar::handlers::list_calendar_events,
        features::cms::handlers::get_content,
        features::notifications::handlers::send_notification,
    ),
    components(
        schemas(
            storage::dto::event::CreateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::run::CreateRunRequest,
            storage::dto::run::RunResponse,
            storage::dto::participant::AddParticipantRequest,
            storage::dto::participant::RemoveParticipantRequest,
            storage::models::Event,
            storage::models::Run,
            storage::models::Participant,
            features::notifications::handlers::NotifyRequest,
        )
    ),
    tags(
        (name = "events", description = "Club events and their rosters"),
        (name = "runs", description = "Recurring runs and their rosters"),
        (name = "calendar", description = "External calendar entries"),
        (name = "cms", description = "Headless CMS content"),
        (name = "notifications", description = "Outbound roster notifications"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting run club API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        calendar: CalendarClient::new(
            config.google_api_base_url.clone(),
            config.google_calendar_id.clone(),
            config.google_api_key.clone(),
        ),
        cms: CmsClient::new(
            config.contentful_api_base_url.clone(),
            config.contentful_space_id.clone(),
            config.contentful_access_token.clone(),
        ),
        notifier: Notifier::new(config.discord_webhook_url.clone()),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .nest("/api", features::api_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
