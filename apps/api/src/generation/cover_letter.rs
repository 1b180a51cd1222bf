//! Cover-letter-only generation. Reuses the completion backend and the
//! response decoder; the prompt asks for just the three letter sections and
//! the decoder's partial tolerance does the rest.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::decoder::decode;
use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, CompletionRequest, Part};
use crate::models::user::AccountIdentity;
use crate::generation::prompts::COVER_LETTER_PROMPT;

const MIN_JOB_DESCRIPTION_LEN: usize = 20;
const MAX_JOB_DESCRIPTION_LEN: usize = 20_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterInput {
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub job_description: String,
    /// Optional decoded resume JSON so the model can ground achievements.
    #[serde(default)]
    pub resume_json: Option<Value>,
}

/// The persisted cover-letter payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterContent {
    pub cover_letter_full: String,
    pub cover_letter_short: String,
    pub cold_email: String,
    pub raw: String,
}

/// Generates the three letter outputs for one job description.
///
/// When the model ignores the marker contract entirely, the full letter
/// falls back to the trimmed raw reply rather than losing the content; the
/// short letter and cold email fall back to empty.
pub async fn generate_cover_letter(
    backend: &dyn CompletionBackend,
    system: &str,
    identity: &AccountIdentity,
    input: &CoverLetterInput,
) -> Result<CoverLetterContent, AppError> {
    let jd_len = input.job_description.trim().len();
    if jd_len < MIN_JOB_DESCRIPTION_LEN {
        return Err(AppError::Validation(format!(
            "Job description must be at least {MIN_JOB_DESCRIPTION_LEN} characters"
        )));
    }
    if jd_len > MAX_JOB_DESCRIPTION_LEN {
        return Err(AppError::Validation(format!(
            "Job description must be at most {MAX_JOB_DESCRIPTION_LEN} characters"
        )));
    }

    let context = json!({
        "name": identity.name,
        "email": identity.email,
        "templateId": input.template_id,
        "jobDescription": input.job_description,
        "resumeJson": input.resume_json,
    });
    let prompt = format!(
        "{COVER_LETTER_PROMPT}{}",
        serde_json::to_string_pretty(&context).map_err(|e| AppError::Internal(e.into()))?
    );

    let raw = backend
        .complete(CompletionRequest {
            system: system.to_string(),
            parts: vec![Part::text(prompt)],
        })
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter call failed: {e}")))?;

    let parsed = decode(&raw);
    Ok(CoverLetterContent {
        cover_letter_full: parsed
            .cover_letter_full
            .unwrap_or_else(|| raw.trim().to_string()),
        cover_letter_short: parsed.cover_letter_short.unwrap_or_default(),
        cold_email: parsed.cold_email.unwrap_or_default(),
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct ScriptedBackend(String);

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn identity() -> AccountIdentity {
        AccountIdentity {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    fn input() -> CoverLetterInput {
        CoverLetterInput {
            template_id: None,
            title: None,
            job_description: "We are hiring a staff engineer to own our billing platform."
                .to_string(),
            resume_json: None,
        }
    }

    #[tokio::test]
    async fn test_marked_reply_maps_into_the_three_sections() {
        let backend = ScriptedBackend(
            "COVER_LETTER_FULL:\nDear team,\nlong body\nCOVER_LETTER_SHORT:\nshort body\nCOLD_EMAIL:\nemail body"
                .to_string(),
        );
        let content = generate_cover_letter(&backend, "system", &identity(), &input())
            .await
            .unwrap();
        assert_eq!(content.cover_letter_full, "Dear team,\nlong body");
        assert_eq!(content.cover_letter_short, "short body");
        assert_eq!(content.cold_email, "email body");
    }

    #[tokio::test]
    async fn test_markerless_reply_falls_back_to_raw_full_letter() {
        let backend = ScriptedBackend("  Dear team, here is a letter without markers.  ".to_string());
        let content = generate_cover_letter(&backend, "system", &identity(), &input())
            .await
            .unwrap();
        assert_eq!(
            content.cover_letter_full,
            "Dear team, here is a letter without markers."
        );
        assert_eq!(content.cover_letter_short, "");
        assert_eq!(content.cold_email, "");
        assert_eq!(content.raw, "  Dear team, here is a letter without markers.  ");
    }

    #[tokio::test]
    async fn test_short_job_description_is_rejected() {
        let backend = ScriptedBackend(String::new());
        let mut bad = input();
        bad.job_description = "too short".to_string();
        let err = generate_cover_letter(&backend, "system", &identity(), &bad)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
