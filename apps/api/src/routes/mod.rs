pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::drafts;
use crate::generation;
use crate::library;
use crate::state::AppState;
use crate::templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route("/api/v1/generate", post(generation::handlers::handle_generate))
        .route(
            "/api/v1/generate/import",
            post(generation::handlers::handle_import),
        )
        // Templates and live preview / export rendering
        .route(
            "/api/v1/templates",
            get(templates::handlers::handle_list_templates),
        )
        .route(
            "/api/v1/render",
            post(templates::handlers::handle_render_preview),
        )
        // Saved resumes (draft routes registered on their own paths so they
        // never collide with /:id)
        .route(
            "/api/v1/resumes",
            post(library::handle_save_resume).get(library::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/draft",
            post(drafts::handlers::handle_save_draft),
        )
        .route(
            "/api/v1/resumes/latest-draft",
            get(drafts::handlers::handle_latest_draft),
        )
        .route(
            "/api/v1/resumes/:id",
            get(library::handle_get_resume)
                .put(library::handle_update_resume)
                .delete(library::handle_delete_resume),
        )
        // Cover letters
        .route(
            "/api/v1/cover-letters/generate",
            post(library::letters::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/cover-letters",
            get(library::letters::handle_list_cover_letters),
        )
        .route(
            "/api/v1/cover-letters/:id",
            get(library::letters::handle_get_cover_letter)
                .delete(library::letters::handle_delete_cover_letter),
        )
        .with_state(state)
}
