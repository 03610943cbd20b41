use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Participant, Run};

/// Request payload for creating a new recurring run
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRunRequest {
    #[validate(length(min = 1, max = 255, message = "Id must be between 1 and 255 characters"))]
    pub id: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Schedule must be between 1 and 255 characters"
    ))]
    pub schedule: String,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

/// Response containing a run together with its full roster
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub id: String,
    pub name: String,
    pub schedule: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
}

impl RunResponse {
    pub fn from_parts(run: Run, participants: Vec<Participant>) -> Self {
        Self {
            id: run.id,
            name: run.name,
            schedule: run.schedule,
            location: run.location,
            created_at: run.created_at,
            participants,
        }
    }
}
