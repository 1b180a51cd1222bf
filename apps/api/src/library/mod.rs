//! Saved resume library — CRUD over generated resume payloads. Rows are
//! scoped by user; the `content` blob (a decoded generation reply or editor
//! state) is stored wholesale.

pub mod letters;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::audit;
use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeSummary};
use crate::state::AppState;

const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub template_id: String,
    pub title: String,
    pub content: Value,
}

/// POST /api/v1/resumes
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.template_id.is_empty() {
        return Err(AppError::Validation("templateId must not be empty".to_string()));
    }
    if req.title.is_empty() || req.title.len() > MAX_TITLE_LEN {
        return Err(AppError::Validation(format!(
            "title must be between 1 and {MAX_TITLE_LEN} characters"
        )));
    }

    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO resumes (id, user_id, template_id, title, content, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, now(), now())
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(&req.template_id)
    .bind(&req.title)
    .bind(&req.content)
    .execute(&state.db)
    .await?;

    audit::record(
        &state.db,
        req.user_id,
        "RESUME_SAVE",
        &format!("Template: {}", req.template_id),
    )
    .await;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

/// GET /api/v1/resumes — newest first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = sqlx::query_as::<_, ResumeSummary>(
        r#"
        SELECT id, template_id, title, created_at
        FROM resumes
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ResumeListResponse { resumes }))
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: ResumeRecord,
}

/// GET /api/v1/resumes/:id — also the download path, hence the audit event.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = sqlx::query_as::<_, ResumeRecord>(
        r#"
        SELECT id, template_id, title, content, created_at
        FROM resumes
        WHERE user_id = $1 AND id = $2
        "#,
    )
    .bind(params.user_id)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    audit::record(
        &state.db,
        params.user_id,
        "RESUME_DOWNLOAD",
        &format!("Resume: {id}"),
    )
    .await;

    Ok(Json(ResumeResponse { resume }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
}

/// PUT /api/v1/resumes/:id — partial overwrite of template/title/content.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResumeRequest>,
) -> Result<Json<Value>, AppError> {
    if req.template_id.is_none() && req.title.is_none() && req.content.is_none() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    if let Some(title) = &req.title {
        if title.is_empty() || title.len() > MAX_TITLE_LEN {
            return Err(AppError::Validation(format!(
                "title must be between 1 and {MAX_TITLE_LEN} characters"
            )));
        }
    }

    let updated = sqlx::query(
        r#"
        UPDATE resumes
        SET template_id = COALESCE($1, template_id),
            title = COALESCE($2, title),
            content = COALESCE($3, content),
            updated_at = now()
        WHERE user_id = $4 AND id = $5
        "#,
    )
    .bind(req.template_id.as_deref())
    .bind(req.title.as_deref())
    .bind(req.content.as_ref())
    .bind(req.user_id)
    .bind(id)
    .execute(&state.db)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }

    audit::record(&state.db, req.user_id, "RESUME_UPDATE", &format!("Resume: {id}")).await;

    Ok(Json(json!({ "ok": true })))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Value>, AppError> {
    sqlx::query("DELETE FROM resumes WHERE user_id = $1 AND id = $2")
        .bind(params.user_id)
        .bind(id)
        .execute(&state.db)
        .await?;
    Ok(Json(json!({ "ok": true })))
}
