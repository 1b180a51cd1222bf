use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::audit;
use crate::errors::AppError;
use crate::models::resume::DraftRecord;
use crate::resume::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub template_id: Option<String>,
    pub content: ResumeData,
}

/// POST /api/v1/resumes/draft
///
/// Upserts the caller's workspace draft for the given template bucket.
/// Last write wins; there is no merge and no version check.
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Json<Value>, AppError> {
    state
        .drafts
        .save_draft(req.user_id, req.template_id.as_deref(), &req.content)
        .await
        .map_err(AppError::Internal)?;

    let bucket = req.template_id.as_deref().unwrap_or("default");
    audit::record(&state.db, req.user_id, "RESUME_DRAFT_SAVE", &format!("Template: {bucket}")).await;

    Ok(Json(json!({ "ok": true })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestDraftQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub template_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LatestDraftResponse {
    pub draft: Option<DraftRecord>,
}

/// GET /api/v1/resumes/latest-draft
pub async fn handle_latest_draft(
    State(state): State<AppState>,
    Query(params): Query<LatestDraftQuery>,
) -> Result<Json<LatestDraftResponse>, AppError> {
    let draft = state
        .drafts
        .latest_draft(params.user_id, params.template_id.as_deref())
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(LatestDraftResponse { draft }))
}
