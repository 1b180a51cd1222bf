//! Cover-letter archive: generate-and-persist plus list/get/delete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::audit;
use crate::errors::AppError;
use crate::generation::cover_letter::{generate_cover_letter, CoverLetterInput};
use crate::library::UserIdQuery;
use crate::models::resume::{CoverLetterRecord, CoverLetterSummary};
use crate::models::user::find_user;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCoverLetterRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub input: CoverLetterInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: Value,
}

/// POST /api/v1/cover-letters/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<GenerateCoverLetterRequest>,
) -> Result<(StatusCode, Json<CoverLetterResponse>), AppError> {
    let user = find_user(&state.db, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.user_id)))?;

    let content = generate_cover_letter(
        state.llm.as_ref(),
        &state.config.system_prompt,
        &user.identity(),
        &req.input,
    )
    .await?;

    let id = Uuid::new_v4();
    let title = req
        .input
        .title
        .as_deref()
        .unwrap_or("Cover Letter")
        .chars()
        .take(200)
        .collect::<String>();
    let content_json =
        serde_json::to_value(&content).map_err(|e| AppError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO cover_letters (id, user_id, template_id, title, job_description, content, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, now())
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.input.template_id.as_deref())
    .bind(&title)
    .bind(&req.input.job_description)
    .bind(&content_json)
    .execute(&state.db)
    .await?;

    let template = req.input.template_id.as_deref().unwrap_or("n/a");
    audit::record(
        &state.db,
        req.user_id,
        "COVERLETTER_GENERATE",
        &format!("Template: {template}"),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CoverLetterResponse {
            cover_letter: json!({
                "id": id,
                "templateId": req.input.template_id,
                "title": title,
                "jobDescription": req.input.job_description,
                "content": content_json,
                "createdAt": Utc::now(),
            }),
        }),
    ))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterListResponse {
    pub cover_letters: Vec<CoverLetterSummary>,
}

/// GET /api/v1/cover-letters — newest first.
pub async fn handle_list_cover_letters(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CoverLetterListResponse>, AppError> {
    let cover_letters = sqlx::query_as::<_, CoverLetterSummary>(
        r#"
        SELECT id, template_id, title, job_description, created_at
        FROM cover_letters
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(CoverLetterListResponse { cover_letters }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterGetResponse {
    pub cover_letter: CoverLetterRecord,
}

/// GET /api/v1/cover-letters/:id
pub async fn handle_get_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CoverLetterGetResponse>, AppError> {
    let cover_letter = sqlx::query_as::<_, CoverLetterRecord>(
        r#"
        SELECT id, template_id, title, job_description, content, created_at
        FROM cover_letters
        WHERE user_id = $1 AND id = $2
        "#,
    )
    .bind(params.user_id)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))?;

    Ok(Json(CoverLetterGetResponse { cover_letter }))
}

/// DELETE /api/v1/cover-letters/:id
pub async fn handle_delete_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Value>, AppError> {
    sqlx::query("DELETE FROM cover_letters WHERE user_id = $1 AND id = $2")
        .bind(params.user_id)
        .bind(id)
        .execute(&state.db)
        .await?;
    Ok(Json(json!({ "ok": true })))
}
