use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::drafts::DraftStore;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. The LLM backend and the draft store are trait objects so
/// handlers can be exercised against doubles.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: Arc<dyn CompletionBackend>,
    pub drafts: Arc<dyn DraftStore>,
    pub config: Config,
}
