use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A schedulable club event with a typed category and a participant roster.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}
