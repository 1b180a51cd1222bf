use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::find_user;
use crate::resume::ResumeData;
use crate::state::AppState;
use crate::templates::{self, TemplateId};

/// GET /api/v1/templates
///
/// The fixed layout catalog, in selector order.
pub async fn handle_list_templates() -> Json<Value> {
    let templates: Vec<Value> = TemplateId::ALL
        .iter()
        .map(|t| {
            json!({
                "id": t.id(),
                "name": t.name(),
                "tag": t.tag(),
            })
        })
        .collect();
    Json(json!({ "templates": templates }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub user_id: Uuid,
    /// Overrides the template carried inside the editor state, if any.
    #[serde(default)]
    pub template_id: Option<String>,
    pub data: ResumeData,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
}

/// POST /api/v1/render
///
/// Projects editor state into the selected layout. The same function backs
/// the live preview and the downloaded document, so what the user sees is
/// what they get.
pub async fn handle_render_preview(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let user = find_user(&state.db, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.user_id)))?;

    let template_id = req
        .template_id
        .as_deref()
        .or(req.data.template_id.as_deref());
    let html = templates::render(&req.data, template_id, &user.identity());
    Ok(Json(RenderResponse { html }))
}
