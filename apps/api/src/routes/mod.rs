pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::assist::handlers as assist;
use crate::cvs::handlers as cvs;
use crate::dashboard;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job requisitions
        .route("/api/v1/jobs", get(jobs::handle_list))
        .route("/api/v1/jobs", post(jobs::handle_create))
        .route("/api/v1/jobs/:id", get(jobs::handle_get))
        .route("/api/v1/jobs/:id", delete(jobs::handle_delete))
        .route("/api/v1/jobs/:id/status", patch(jobs::handle_update_status))
        // Per-job CVs
        .route("/api/v1/jobs/:id/cvs", get(cvs::handle_list))
        .route("/api/v1/jobs/:id/cvs", post(cvs::handle_upload))
        .route(
            "/api/v1/jobs/:id/cvs/:cv_id/status",
            patch(cvs::handle_update_status),
        )
        .route("/api/v1/jobs/:id/cvs/:cv_id", delete(cvs::handle_delete))
        // Form metadata and dashboard
        .route("/api/v1/departments", get(jobs::handle_departments))
        .route("/api/v1/dashboard/stats", get(dashboard::handle_stats))
        // AI assist bridge
        .route("/api/v1/assist/fill", post(assist::handle_fill))
        .route("/api/v1/assist/events", get(assist::handle_events))
        .with_state(state)
}
