use axum::extract::{Path, State};
use axum::Json;

use crate::envelope::ApiResponse;
use crate::state::AppState;

use super::models::{CreateJobRequest, JobRequisition, UpdateJobStatusRequest};

/// GET /api/v1/jobs
pub async fn handle_list(State(state): State<AppState>) -> Json<ApiResponse<Vec<JobRequisition>>> {
    Json(state.jobs.list().await)
}

/// POST /api/v1/jobs
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Json<ApiResponse<JobRequisition>> {
    Json(state.jobs.create(request).await)
}

/// GET /api/v1/jobs/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<Option<JobRequisition>>> {
    Json(state.jobs.get(&id).await)
}

/// PATCH /api/v1/jobs/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateJobStatusRequest>,
) -> Json<ApiResponse<Option<JobRequisition>>> {
    Json(state.jobs.update_status(&id, request.status).await)
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<()>> {
    Json(state.jobs.delete(&id).await)
}

/// GET /api/v1/departments
pub async fn handle_departments(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(state.jobs.departments().await)
}
