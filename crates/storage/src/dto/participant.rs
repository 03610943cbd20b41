use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for joining an event or run
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddParticipantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "userId must be between 1 and 255 characters"
    ))]
    pub user_id: String,

    #[validate(length(max = 255))]
    pub name: Option<String>,
}

/// Request payload for leaving an event or run. Every roster row matching
/// the user is removed, so a stale double-join disappears in one call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveParticipantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "userId must be between 1 and 255 characters"
    ))]
    pub user_id: String,
}
