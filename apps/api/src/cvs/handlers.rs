use axum::extract::{Multipart, Path, State};
use axum::Json;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::state::AppState;

use super::models::{Cv, UpdateCvStatusRequest};

/// GET /api/v1/jobs/:id/cvs
pub async fn handle_list(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Json<ApiResponse<Vec<Cv>>> {
    Json(state.cvs.list_for_job(&job_id).await)
}

/// POST /api/v1/jobs/:id/cvs
///
/// Accepts one or many files as multipart form data. Content is drained and
/// dropped; the pipeline fabricates metadata from the profile pool.
pub async fn handle_upload(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Vec<Cv>>>, AppError> {
    let mut count = 0;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.file_name().is_none() {
            continue;
        }
        field
            .bytes()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read upload: {e}")))?;
        count += 1;
    }

    if count == 0 {
        return Err(AppError::Validation("No files in upload".to_string()));
    }
    Ok(Json(state.cvs.upload_many(&job_id, count).await))
}

/// PATCH /api/v1/jobs/:id/cvs/:cv_id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path((job_id, cv_id)): Path<(String, String)>,
    Json(request): Json<UpdateCvStatusRequest>,
) -> Json<ApiResponse<Option<Cv>>> {
    Json(state.cvs.update_status(&job_id, &cv_id, request.status).await)
}

/// DELETE /api/v1/jobs/:id/cvs/:cv_id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path((job_id, cv_id)): Path<(String, String)>,
) -> Json<ApiResponse<()>> {
    Json(state.cvs.delete(&job_id, &cv_id).await)
}
