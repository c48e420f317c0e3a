//! Live dashboard counters computed from the stores.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::cvs::store::CvStore;
use crate::envelope::ApiResponse;
use crate::jobs::models::JobStatus;
use crate::jobs::store::JobStore;
use crate::latency::Latency;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_cvs: usize,
    pub pending_reviews: usize,
}

/// Aggregates across both stores behind a single simulated round-trip (the
/// stores' own pauses are bypassed so one request doesn't pay the RTT
/// three times).
pub async fn stats(jobs: &JobStore, cvs: &CvStore, latency: &Latency) -> ApiResponse<DashboardStats> {
    latency.pause().await;
    let snapshot = jobs.snapshot().await;
    let (total_cvs, pending_reviews) = cvs.counts().await;

    let stats = DashboardStats {
        total_jobs: snapshot.len(),
        active_jobs: snapshot
            .iter()
            .filter(|j| j.status == JobStatus::Active)
            .count(),
        total_cvs,
        pending_reviews,
    };
    ApiResponse::ok(stats, "Dashboard stats fetched successfully")
}

/// GET /api/v1/dashboard/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    Json(stats(&state.jobs, &state.cvs, &state.latency).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::storage::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_stats_reflect_the_seeded_stores() {
        let jobs = JobStore::new(Arc::new(MemoryStore::new()), Latency::none());
        let cvs = CvStore::new(Latency::none());

        let response = stats(&jobs, &cvs, &Latency::none()).await;
        assert!(response.success);
        assert_eq!(
            response.data,
            DashboardStats {
                total_jobs: 5,
                active_jobs: 4,
                total_cvs: 7,
                pending_reviews: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_stats_track_store_mutations() {
        let jobs = JobStore::new(Arc::new(MemoryStore::new()), Latency::none());
        let cvs = CvStore::new(Latency::none());

        jobs.update_status("1", JobStatus::Closed).await;
        cvs.upload("3").await;

        let data = stats(&jobs, &cvs, &Latency::none()).await.data;
        assert_eq!(data.active_jobs, 3);
        assert_eq!(data.total_cvs, 8);
        assert_eq!(data.pending_reviews, 4);
    }
}
