use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A recurring club run. Structurally parallel to an event but carries a
/// free-form schedule instead of a single instant, and no category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}
