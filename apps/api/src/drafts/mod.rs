//! Draft persistence — the autosave workspace slot.
//!
//! One draft row per `(user, template-bucket)`; saving is an upsert with
//! last-write-wins semantics and no merge. The store is a trait so the
//! autosave coordinator can be exercised against an in-memory double.

pub mod autosave;
pub mod handlers;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::DraftRecord;
use crate::resume::ResumeData;

/// The persistence collaborator behind autosave. `template_id = None`
/// addresses the untemplated bucket (stored as the empty string).
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Upsert; last write wins.
    async fn save_draft(
        &self,
        user_id: Uuid,
        template_id: Option<&str>,
        content: &ResumeData,
    ) -> anyhow::Result<()>;

    /// The most recently updated draft in the bucket, or None. Without a
    /// template filter this returns the newest draft across all buckets.
    async fn latest_draft(
        &self,
        user_id: Uuid,
        template_id: Option<&str>,
    ) -> anyhow::Result<Option<DraftRecord>>;
}

pub struct PgDraftStore {
    pool: PgPool,
}

impl PgDraftStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DraftStore for PgDraftStore {
    async fn save_draft(
        &self,
        user_id: Uuid,
        template_id: Option<&str>,
        content: &ResumeData,
    ) -> anyhow::Result<()> {
        let bucket = template_id.unwrap_or("");
        let content = serde_json::to_value(content)?;
        sqlx::query(
            r#"
            INSERT INTO resume_drafts (id, user_id, template_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, now(), now())
            ON CONFLICT (user_id, template_id) DO UPDATE
              SET content = EXCLUDED.content,
                  updated_at = now()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(bucket)
        .bind(&content)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn latest_draft(
        &self,
        user_id: Uuid,
        template_id: Option<&str>,
    ) -> anyhow::Result<Option<DraftRecord>> {
        let bucket = template_id.unwrap_or("");
        let row = sqlx::query_as::<_, DraftRecord>(
            r#"
            SELECT id, template_id, content, created_at, updated_at
            FROM resume_drafts
            WHERE user_id = $1
              AND ($2 = '' OR template_id = $2)
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(bucket)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
