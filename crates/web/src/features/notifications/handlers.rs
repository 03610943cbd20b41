use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::notifier::NotificationKind;
use crate::state::AppState;

/// Payload of the internal notify endpoint, mirroring what the roster
/// services dispatch themselves.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub event_name: String,
    pub participant_name: String,
    pub event_start: Option<DateTime<Utc>>,
    pub action_type: String,
}

/// This endpoint reports delivery failure in the body, not the status
/// line: a webhook outage is not a caller error.
#[utoipa::path(
    post,
    path = "/api/discord-notify",
    request_body = NotifyRequest,
    responses(
        (status = 200, description = "Always 200; the success flag carries the delivery outcome")
    ),
    tag = "notifications"
)]
pub async fn send_notification(
    State(state): State<AppState>,
    Json(payload): Json<NotifyRequest>,
) -> Json<serde_json::Value> {
    let Some(kind) = NotificationKind::parse(&payload.action_type) else {
        return Json(json!({ "success": false, "error": "Unknown action type" }));
    };

    let delivered = state
        .notifier
        .notify(
            kind,
            &payload.event_name,
            &payload.participant_name,
            payload.event_start,
        )
        .await;

    if delivered {
        Json(json!({ "success": true }))
    } else {
        Json(json!({ "success": false, "error": "Failed to send notification" }))
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use storage::Database;
    use tower::ServiceExt;

    use crate::features;
    use crate::features::calendar::client::CalendarClient;
    use crate::features::cms::client::CmsClient;
    use crate::features::notifications::notifier::Notifier;
    use crate::state::AppState;

    fn test_app(webhook_url: Option<String>) -> Router {
        // Lazy handle: these tests never touch the database.
        let db = Database::connect_lazy("postgres://postgres@127.0.0.1:1/unused").unwrap();

        let state = AppState {
            db,
            calendar: CalendarClient::new(
                "http://127.0.0.1:9".to_string(),
                "calendar".to_string(),
                "key".to_string(),
            ),
            cms: CmsClient::new(
                "http://127.0.0.1:9".to_string(),
                "space".to_string(),
                "token".to_string(),
            ),
            notifier: Notifier::new(webhook_url),
        };

        Router::new()
            .nest("/api", features::api_router())
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_webhook_outage_is_reported_in_the_body_with_200() {
        let app = test_app(Some("http://127.0.0.1:9/webhook".to_string()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/discord-notify")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"eventName":"5K Fun Run","participantName":"Alex","eventStart":"2025-03-14T18:00:00Z","actionType":"ADD"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to send notification");
    }

    #[tokio::test]
    async fn test_unknown_action_type_is_reported_in_the_body_with_200() {
        let app = test_app(None);

        let request = Request::builder()
            .method("POST")
            .uri("/api/discord-notify")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"eventName":"5K Fun Run","participantName":"Alex","actionType":"JOIN"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Unknown action type");
    }
}
