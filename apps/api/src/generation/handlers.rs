use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit;
use crate::decoder::ParsedResponse;
use crate::errors::AppError;
use crate::generation::orchestrator::{self, GenerationInput, GenerationMode};
use crate::resume::{import::map_resume_json, ResumeData};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_id: Uuid,
    pub mode: GenerationMode,
    #[serde(flatten)]
    pub input: GenerationInput,
}

/// POST /api/v1/generate
///
/// Runs one generation round-trip and returns the decoded sections. The
/// client keeps its editor state; on failure nothing is cleared.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<ParsedResponse>, AppError> {
    let template = req.input.resume.template_id.as_deref().unwrap_or("None");
    audit::record(
        &state.db,
        req.user_id,
        "RESUME_GENERATE",
        &format!("Mode: {:?}, Template: {template}", req.mode),
    )
    .await;

    let parsed = orchestrator::generate(
        state.llm.as_ref(),
        &state.config.system_prompt,
        &req.input,
        req.mode,
    )
    .await?;

    Ok(Json(parsed))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub input: GenerationInput,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub data: ResumeData,
}

/// POST /api/v1/generate/import
///
/// The import flow: parse an uploaded/pasted resume in mode A, then map the
/// decoded structured JSON back into editor state. A reply without a usable
/// JSON section is an unprocessable document, not a transport failure.
pub async fn handle_import(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    audit::record(&state.db, req.user_id, "RESUME_PARSE", "Importing resume to editor").await;

    let parsed = orchestrator::generate(
        state.llm.as_ref(),
        &state.config.system_prompt,
        &req.input,
        GenerationMode::FormatExisting,
    )
    .await?;

    let json = parsed.json.ok_or_else(|| {
        AppError::UnprocessableEntity("Could not parse resume data structure".to_string())
    })?;

    Ok(Json(ImportResponse {
        data: map_resume_json(&json),
    }))
}
