//! Row types for the resume library, the autosave draft slot, and the
//! cover-letter archive. The `content` columns are jsonb blobs owned by the
//! web client (editor state or a decoded generation reply); this service
//! stores them wholesale and never patches inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved resume payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub template_id: String,
    pub title: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
}

/// Listing row for the resume library (content omitted).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub template_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// The autosave workspace slot. One row per `(user, template-bucket)`;
/// `template_id` is the empty string for the untemplated bucket.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub id: Uuid,
    pub template_id: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A persisted cover-letter generation result.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRecord {
    pub id: Uuid,
    pub template_id: Option<String>,
    pub title: String,
    pub job_description: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
}

/// Listing row for the cover-letter archive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterSummary {
    pub id: Uuid,
    pub template_id: Option<String>,
    pub title: String,
    pub job_description: String,
    pub created_at: DateTime<Utc>,
}
