use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::Mutex;

use crate::envelope::ApiResponse;
use crate::latency::Latency;

use super::models::{Cv, CvStatus};
use super::pool;

/// Fabricated upload sizes land in this range (bytes).
const FILE_SIZE_RANGE: std::ops::Range<u64> = 140_000..320_000;

/// Per-job CV lifecycle, held only for the lifetime of the process.
///
/// One lock guards the per-job map, the `cv{n}` id counter, and the
/// profile-pool cursor. The cursor is process-wide: uploads to different
/// jobs draw from the same round-robin sequence.
pub struct CvStore {
    latency: Latency,
    state: Mutex<CvState>,
}

struct CvState {
    by_job: HashMap<String, Vec<Cv>>,
    next_id: u64,
    pool_cursor: usize,
}

impl CvState {
    /// Admits one upload: assigns the next pooled profile and a fresh id,
    /// fabricates the file metadata, and appends to the job's list. The
    /// real upload's name and bytes are never consulted.
    fn admit(&mut self, job_id: &str) -> Cv {
        let profile = pool::profile_at(self.pool_cursor);
        self.pool_cursor += 1;

        let id = format!("cv{}", self.next_id);
        self.next_id += 1;

        let cv = Cv {
            id,
            file_name: pool::file_name_for(&profile),
            file_size: rand::thread_rng().gen_range(FILE_SIZE_RANGE),
            uploaded_at: Utc::now(),
            status: CvStatus::Pending,
            parsed: Some(profile),
        };
        self.by_job
            .entry(job_id.to_string())
            .or_default()
            .push(cv.clone());
        cv
    }
}

impl CvStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            latency,
            state: Mutex::new(CvState {
                by_job: seed_cvs(),
                next_id: 8,
                pool_cursor: 0,
            }),
        }
    }

    /// Returns the job's CVs; a job with no uploads yet yields an empty
    /// list, not an error.
    pub async fn list_for_job(&self, job_id: &str) -> ApiResponse<Vec<Cv>> {
        self.latency.pause().await;
        let state = self.state.lock().await;
        let cvs = state.by_job.get(job_id).cloned().unwrap_or_default();
        ApiResponse::ok(cvs, "CVs fetched successfully")
    }

    pub async fn upload(&self, job_id: &str) -> ApiResponse<Cv> {
        self.latency.pause().await;
        let mut state = self.state.lock().await;
        let cv = state.admit(job_id);
        ApiResponse::ok(cv, "CV uploaded successfully")
    }

    pub async fn upload_many(&self, job_id: &str, count: usize) -> ApiResponse<Vec<Cv>> {
        self.latency.pause().await;
        let mut state = self.state.lock().await;
        let cvs: Vec<Cv> = (0..count).map(|_| state.admit(job_id)).collect();
        ApiResponse::ok(cvs, format!("{count} CV(s) uploaded successfully"))
    }

    pub async fn update_status(
        &self,
        job_id: &str,
        cv_id: &str,
        status: CvStatus,
    ) -> ApiResponse<Option<Cv>> {
        self.latency.pause().await;
        let mut state = self.state.lock().await;

        let Some(cvs) = state.by_job.get_mut(job_id) else {
            return ApiResponse::fail(None, "Job not found");
        };
        let Some(cv) = cvs.iter_mut().find(|c| c.id == cv_id) else {
            return ApiResponse::fail(None, "CV not found");
        };
        cv.status = status;
        ApiResponse::ok(Some(cv.clone()), "CV status updated successfully")
    }

    /// Removes the CV if present; unknown job or CV ids are not errors.
    pub async fn delete(&self, job_id: &str, cv_id: &str) -> ApiResponse<()> {
        self.latency.pause().await;
        let mut state = self.state.lock().await;
        if let Some(cvs) = state.by_job.get_mut(job_id) {
            cvs.retain(|c| c.id != cv_id);
        }
        ApiResponse::ok((), "CV deleted successfully")
    }

    /// (total, pending) counts without the simulated round-trip; used by
    /// callers that aggregate across stores behind a single pause.
    pub(crate) async fn counts(&self) -> (usize, usize) {
        let state = self.state.lock().await;
        let total = state.by_job.values().map(Vec::len).sum();
        let pending = state
            .by_job
            .values()
            .flatten()
            .filter(|c| c.status == CvStatus::Pending)
            .count();
        (total, pending)
    }
}

/// Fixture CVs present at process start; none carry a parsed profile.
fn seed_cvs() -> HashMap<String, Vec<Cv>> {
    let fixture = |id: &str, file_name: &str, file_size: u64, uploaded_at: &str, status: CvStatus| Cv {
        id: id.to_string(),
        file_name: file_name.to_string(),
        file_size,
        uploaded_at: ts(uploaded_at),
        status,
        parsed: None,
    };

    HashMap::from([
        (
            "1".to_string(),
            vec![
                fixture("cv1", "john_doe_resume.pdf", 245_000, "2025-12-21T10:30:00Z", CvStatus::Reviewed),
                fixture("cv2", "jane_smith_cv.pdf", 189_000, "2025-12-21T11:45:00Z", CvStatus::Shortlisted),
                fixture("cv3", "bob_wilson_resume.docx", 156_000, "2025-12-22T09:00:00Z", CvStatus::Pending),
            ],
        ),
        (
            "2".to_string(),
            vec![fixture("cv4", "alice_johnson_pm.pdf", 278_000, "2025-12-20T14:00:00Z", CvStatus::Pending)],
        ),
        ("3".to_string(), vec![]),
        (
            "4".to_string(),
            vec![fixture("cv5", "data_analyst_resume.pdf", 198_000, "2025-12-16T10:00:00Z", CvStatus::Rejected)],
        ),
        (
            "5".to_string(),
            vec![
                fixture("cv6", "devops_engineer.pdf", 220_000, "2025-12-18T15:30:00Z", CvStatus::Reviewed),
                fixture("cv7", "cloud_specialist.pdf", 245_000, "2025-12-19T09:15:00Z", CvStatus::Pending),
            ],
        ),
    ])
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("fixture timestamp is valid RFC 3339")
        .with_timezone(&Utc)
}
