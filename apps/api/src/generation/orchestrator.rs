//! Generation Orchestrator — assembles the completion request for one
//! generate action and feeds the raw reply to the response decoder.
//!
//! Request assembly is pure and validated before any network traffic; the
//! single LLM call has no retries and no partial-result handling, so a
//! transport failure reaches the caller as one terminal error while their
//! editor state stays untouched.

use serde::Deserialize;
use tracing::warn;

use crate::decoder::{decode, ParsedResponse};
use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, CompletionRequest, Part};
use crate::resume::{ImageData, ResumeData};

/// Generation mode. Wire values match the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GenerationMode {
    /// Mode A: format/upgrade an existing resume (attached file or pasted
    /// text).
    #[serde(rename = "MODE_A")]
    FormatExisting,
    /// Mode B: create from the structured editor data.
    #[serde(rename = "MODE_B")]
    CreateScratch,
}

/// Everything the client sends with a generate action: the editor state plus
/// the mode-A inputs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationInput {
    #[serde(flatten)]
    pub resume: ResumeData,
    /// Pasted resume text (mode A).
    pub current_resume_text: Option<String>,
    /// Uploaded resume document, opaque base64 + declared mime type (mode A).
    pub file_data: Option<ImageData>,
}

/// Runs one generation round-trip: assemble, call, decode.
pub async fn generate(
    backend: &dyn CompletionBackend,
    system: &str,
    input: &GenerationInput,
    mode: GenerationMode,
) -> Result<ParsedResponse, AppError> {
    let parts = assemble_parts(input, mode)?;

    let raw = backend
        .complete(CompletionRequest {
            system: system.to_string(),
            parts,
        })
        .await
        .map_err(|e| AppError::Llm(format!("Generation call failed: {e}")))?;

    let parsed = decode(&raw);
    if parsed.section_count() == 0 {
        // Likely marker drift between the prompt and the decoder.
        warn!("generation reply contained no recognizable section markers");
    }
    Ok(parsed)
}

/// Builds the ordered request parts. Mode A requires an attached document or
/// pasted text and is rejected here, before any network call; it is never
/// silently downgraded to mode B.
pub(crate) fn assemble_parts(
    input: &GenerationInput,
    mode: GenerationMode,
) -> Result<Vec<Part>, AppError> {
    let pasted_text = input
        .current_resume_text
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();

    if mode == GenerationMode::FormatExisting && input.file_data.is_none() && pasted_text.is_empty()
    {
        return Err(AppError::Validation(
            "Formatting an existing resume requires an uploaded resume file or pasted resume text"
                .to_string(),
        ));
    }

    let data = &input.resume;
    let mut prompt = format!(
        "Template ID: \"{}\"\nPreferences: Pages={}, Tone={}, Region={}, Photo={}\n",
        data.template_id.as_deref().unwrap_or("None (Default)"),
        data.preferences.pages.as_str(),
        data.preferences.tone.as_str(),
        data.preferences.region.as_str(),
        if data.preferences.photo { "Yes" } else { "No" },
    );
    if !data.job_description.is_empty() {
        prompt.push_str(&format!("Job description:\n{}\n", data.job_description));
    }

    let mut parts = Vec::new();

    // The profile photo rides along in both modes as context only; the
    // labeling keeps it from being mistaken for the document to transcribe.
    if data.preferences.photo {
        if let Some(photo) = &data.profile_image_data {
            parts.push(Part::text(
                "User profile photo (for context/verification only):",
            ));
            parts.push(Part::inline(photo.mime_type.clone(), photo.data.clone()));
        }
    }

    match mode {
        GenerationMode::FormatExisting => {
            if let Some(file) = &input.file_data {
                parts.push(Part::inline(file.mime_type.clone(), file.data.clone()));
                prompt.push_str(
                    "\nThe existing resume is attached as a file above. \
                     Extract all information from it to build the new resume.\n",
                );
            } else {
                prompt.push_str(&format!("\nExisting resume text:\n{pasted_text}\n"));
            }
        }
        GenerationMode::CreateScratch => {
            prompt.push_str("\nCREATE FROM SCRATCH DATA:\n");
            let target_role = if data.target_role.is_empty() {
                "Not specified"
            } else {
                data.target_role.as_str()
            };
            prompt.push_str(&format!("Target Role: {target_role}\n"));

            if !data.experience_items.is_empty() {
                prompt.push_str("\nWORK EXPERIENCE:\n");
                for item in &data.experience_items {
                    prompt.push_str(&format!(
                        "- Role: {} at {} ({}). Details: {}\n",
                        item.role, item.company, item.dates, item.description
                    ));
                }
            }

            if !data.education_items.is_empty() {
                prompt.push_str("\nEDUCATION:\n");
                for item in &data.education_items {
                    prompt.push_str(&format!(
                        "- {} from {} ({})\n",
                        item.degree, item.school, item.dates
                    ));
                }
            }

            if !data.skill_items.is_empty() {
                prompt.push_str("\nSKILLS & OTHER SECTIONS:\n");
                for item in &data.skill_items {
                    prompt.push_str(&format!(
                        "- Category: {}. Items: {}\n",
                        item.category, item.items
                    ));
                }
            }
        }
    }

    parts.push(Part::text(prompt));
    Ok(parts)
}
