use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::client::select_content;
use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CmsQuery {
    /// Content-type tag to filter by
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    /// Page size; omitted or 1 means "exactly one entry, 404 on no match"
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/cms",
    params(CmsQuery),
    responses(
        (status = 200, description = "Single entry or array of entries, depending on limit"),
        (status = 400, description = "Missing content type parameter"),
        (status = 404, description = "No entry matched a single-entry lookup")
    ),
    tag = "cms"
)]
pub async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<CmsQuery>,
) -> Result<Json<serde_json::Value>, WebError> {
    let content_type = query
        .content_type
        .filter(|t| !t.is_empty())
        .ok_or_else(|| WebError::BadRequest("Content type parameter is required".to_string()))?;

    let limit = query.limit.unwrap_or(1);
    let items = state.cms.entries_by_type(&content_type, Some(limit)).await?;

    let content = select_content(items, limit == 1)?;

    Ok(Json(content))
}
