use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One user's membership in a single event or run. Exactly one of
/// `event_id`/`run_id` is set, mirroring the table CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Uuid,
    pub user_id: String,
    pub name: Option<String>,
    pub event_id: Option<String>,
    pub run_id: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Name to show in outbound messages; falls back to the user id when no
    /// display name was supplied at join time.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.user_id)
    }
}
