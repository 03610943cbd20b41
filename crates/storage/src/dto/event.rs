use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Event, Participant};

/// Closed set of event categories accepted at creation time.
pub const VALID_EVENT_TYPES: &[&str] = &["SOCIAL", "RACE", "TRAINING"];

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Id must be between 1 and 255 characters"))]
    pub id: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub date: DateTime<Utc>,

    #[validate(custom(function = "validate_event_type"))]
    #[serde(rename = "type")]
    pub event_type: String,
}

/// Response containing an event together with its full roster
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
}

impl EventResponse {
    pub fn from_parts(event: Event, participants: Vec<Participant>) -> Self {
        Self {
            id: event.id,
            name: event.name,
            date: event.date,
            event_type: event.event_type,
            created_at: event.created_at,
            participants,
        }
    }
}

fn validate_event_type(event_type: &str) -> Result<(), validator::ValidationError> {
    if VALID_EVENT_TYPES.contains(&event_type) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_event_type"))
    }
}
