use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::envelope::ApiResponse;
use crate::latency::Latency;
use crate::storage::SnapshotStore;

use super::models::{CreateJobRequest, JobRequisition, JobStatus, DEPARTMENTS};

/// Storage key holding the JSON-encoded requisition snapshot.
const SNAPSHOT_KEY: &str = "job_requisitions";

/// Durable CRUD over the job requisition collection.
///
/// Every operation pauses on simulated latency, then read-modify-writes the
/// whole snapshot under a process-local lock. Writers in other processes
/// sharing the same backing race last-writer-wins; there is no merge and no
/// optimistic locking.
pub struct JobStore {
    storage: Arc<dyn SnapshotStore>,
    latency: Latency,
    lock: Mutex<()>,
}

impl JobStore {
    pub fn new(storage: Arc<dyn SnapshotStore>, latency: Latency) -> Self {
        Self {
            storage,
            latency,
            lock: Mutex::new(()),
        }
    }

    /// Returns the full collection. Never fails: a missing snapshot is
    /// lazily seeded with the example set, and an unreadable one degrades to
    /// the seed set without persisting it.
    pub async fn list(&self) -> ApiResponse<Vec<JobRequisition>> {
        self.latency.pause().await;
        let _guard = self.lock.lock().await;
        let jobs = self.load_or_seed().await;
        ApiResponse::ok(jobs, "Jobs fetched successfully")
    }

    pub async fn get(&self, id: &str) -> ApiResponse<Option<JobRequisition>> {
        self.latency.pause().await;
        let _guard = self.lock.lock().await;
        let jobs = self.load_or_seed().await;
        match jobs.into_iter().find(|j| j.id == id) {
            Some(job) => ApiResponse::ok(Some(job), "Job fetched successfully"),
            None => ApiResponse::fail(None, "Job not found"),
        }
    }

    /// Creates a requisition with the next id, `active` status, and a zero
    /// candidate count, then rewrites the snapshot.
    pub async fn create(&self, request: CreateJobRequest) -> ApiResponse<JobRequisition> {
        self.latency.pause().await;
        let _guard = self.lock.lock().await;
        let mut jobs = self.load_or_seed().await;

        let next_id = jobs
            .iter()
            .map(|j| j.id.parse::<u64>().unwrap_or(0))
            .max()
            .unwrap_or(0)
            + 1;
        let now = Utc::now();
        let job = JobRequisition {
            id: next_id.to_string(),
            title: request.title,
            department: request.department,
            location: request.location,
            employment_type: request.employment_type,
            hiring_manager: request.hiring_manager,
            target_years_min: request.target_years_min,
            target_years_max: request.target_years_max,
            required_skills: request.required_skills,
            nice_to_have_skills: request.nice_to_have_skills,
            status: JobStatus::Active,
            candidate_count: Some(0),
            created_at: now,
            updated_at: now,
        };

        jobs.push(job.clone());
        self.persist(&jobs).await;
        ApiResponse::ok(job, "Job created successfully")
    }

    /// Replaces `status` and refreshes `updated_at`; every other field is
    /// left untouched.
    pub async fn update_status(
        &self,
        id: &str,
        status: JobStatus,
    ) -> ApiResponse<Option<JobRequisition>> {
        self.latency.pause().await;
        let _guard = self.lock.lock().await;
        let mut jobs = self.load_or_seed().await;

        let Some(job) = jobs.iter_mut().find(|j| j.id == id) else {
            return ApiResponse::fail(None, "Job not found");
        };
        job.status = status;
        job.updated_at = Utc::now();
        let updated = job.clone();

        self.persist(&jobs).await;
        ApiResponse::ok(Some(updated), "Job status updated successfully")
    }

    /// Removes the requisition if present. Deleting an unknown id is not an
    /// error.
    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.latency.pause().await;
        let _guard = self.lock.lock().await;
        let mut jobs = self.load_or_seed().await;
        jobs.retain(|j| j.id != id);
        self.persist(&jobs).await;
        ApiResponse::ok((), "Job deleted successfully")
    }

    pub async fn departments(&self) -> ApiResponse<Vec<String>> {
        self.latency.pause().await;
        let departments = DEPARTMENTS.iter().map(ToString::to_string).collect();
        ApiResponse::ok(departments, "Departments fetched successfully")
    }

    /// Current collection without the simulated round-trip; used by callers
    /// that aggregate across stores behind a single pause.
    pub(crate) async fn snapshot(&self) -> Vec<JobRequisition> {
        let _guard = self.lock.lock().await;
        self.load_or_seed().await
    }

    async fn load_or_seed(&self) -> Vec<JobRequisition> {
        match self.storage.read(SNAPSHOT_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(jobs) => jobs,
                Err(e) => {
                    warn!("job snapshot is unreadable, serving seed set: {e}");
                    super::models::seed_jobs()
                }
            },
            Ok(None) => {
                let jobs = super::models::seed_jobs();
                self.persist(&jobs).await;
                jobs
            }
            Err(e) => {
                error!("job snapshot read failed, serving seed set: {e}");
                super::models::seed_jobs()
            }
        }
    }

    /// Rewrites the whole snapshot. A failed write is logged only; the
    /// operation still reports success to its caller.
    async fn persist(&self, jobs: &[JobRequisition]) {
        let payload = match serde_json::to_string(jobs) {
            Ok(payload) => payload,
            Err(e) => {
                error!("job snapshot serialization failed: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(SNAPSHOT_KEY, &payload).await {
            error!("job snapshot write failed, latest mutation not persisted: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::jobs::models::{EmploymentType, WorkLocation};
    use crate::storage::{MemoryStore, StorageError};

    use super::*;

    fn sample_request() -> CreateJobRequest {
        CreateJobRequest {
            title: "Backend Engineer".to_string(),
            department: "Engineering".to_string(),
            location: WorkLocation::Remote,
            employment_type: EmploymentType::FullTime,
            hiring_manager: "A".to_string(),
            target_years_min: None,
            target_years_max: None,
            required_skills: vec!["Python".to_string()],
            nice_to_have_skills: vec![],
        }
    }

    fn store_over(backend: Arc<MemoryStore>) -> JobStore {
        JobStore::new(backend, Latency::none())
    }

    async fn empty_backend() -> Arc<MemoryStore> {
        let backend = Arc::new(MemoryStore::new());
        backend.write(SNAPSHOT_KEY, "[]").await.unwrap();
        backend
    }

    #[tokio::test]
    async fn test_list_seeds_on_first_access_and_persists() {
        let backend = Arc::new(MemoryStore::new());
        let store = store_over(backend.clone());

        let response = store.list().await;
        assert!(response.success);
        assert_eq!(response.data.len(), 5);

        let raw = backend.read(SNAPSHOT_KEY).await.unwrap().expect("seeded");
        let persisted: Vec<JobRequisition> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, response.data);
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_not_reseeded() {
        let store = store_over(empty_backend().await);
        let response = store.list().await;
        assert!(response.success);
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn test_create_against_empty_store_assigns_id_one() {
        let store = store_over(empty_backend().await);

        let response = store.create(sample_request()).await;
        assert!(response.success);
        let job = response.data;
        assert_eq!(job.id, "1");
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.candidate_count, Some(0));
        assert_eq!(job.created_at, job.updated_at);
        assert_eq!(job.required_skills, vec!["Python"]);
    }

    #[tokio::test]
    async fn test_create_continues_from_max_existing_id() {
        let backend = Arc::new(MemoryStore::new());
        let mut jobs = vec![crate::jobs::models::seed_jobs().remove(4)];
        jobs[0].id = "5".to_string();
        backend
            .write(SNAPSHOT_KEY, &serde_json::to_string(&jobs).unwrap())
            .await
            .unwrap();

        let store = store_over(backend);
        let created = store.create(sample_request()).await.data;
        assert_eq!(created.id, "6");
    }

    #[tokio::test]
    async fn test_created_job_survives_a_fresh_store_over_the_same_backing() {
        let backend = empty_backend().await;
        let created = store_over(backend.clone()).create(sample_request()).await.data;

        let fresh = store_over(backend);
        let listed = fresh.list().await.data;
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_get_returns_failure_envelope_for_unknown_id() {
        let store = store_over(Arc::new(MemoryStore::new()));
        let response = store.get("999").await;
        assert!(!response.success);
        assert_eq!(response.data, None);
        assert_eq!(response.message.as_deref(), Some("Job not found"));
    }

    #[tokio::test]
    async fn test_update_status_touches_only_status_and_updated_at() {
        let store = store_over(empty_backend().await);
        let created = store.create(sample_request()).await.data;

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated = store
            .update_status(&created.id, JobStatus::Closed)
            .await
            .data
            .expect("job exists");

        assert_eq!(updated.status, JobStatus::Closed);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.required_skills, created.required_skills);
        assert_eq!(updated.candidate_count, created.candidate_count);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_fails_without_mutating() {
        let store = store_over(empty_backend().await);
        let response = store.update_status("42", JobStatus::Paused).await;
        assert!(!response.success);
        assert_eq!(response.data, None);
        assert_eq!(response.message.as_deref(), Some("Job not found"));
        assert!(store.list().await.data.is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store_over(Arc::new(MemoryStore::new()));
        assert_eq!(store.list().await.data.len(), 5);

        assert!(store.delete("does-not-exist").await.success);
        assert_eq!(store.list().await.data.len(), 5);

        assert!(store.delete("1").await.success);
        assert_eq!(store.list().await.data.len(), 4);

        assert!(store.delete("1").await.success);
        assert_eq!(store.list().await.data.len(), 4);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_serves_seed_without_persisting() {
        let backend = Arc::new(MemoryStore::new());
        backend.write(SNAPSHOT_KEY, "{not json").await.unwrap();

        let store = store_over(backend.clone());
        let response = store.list().await;
        assert!(response.success);
        assert_eq!(response.data.len(), 5);

        // The corrupt payload must still be in place.
        assert_eq!(
            backend.read(SNAPSHOT_KEY).await.unwrap().as_deref(),
            Some("{not json")
        );
    }

    struct FailingWrites;

    #[async_trait]
    impl SnapshotStore for FailingWrites {
        async fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(Some("[]".to_string()))
        }

        async fn write(&self, _key: &str, _payload: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "quota exceeded",
            )))
        }
    }

    #[tokio::test]
    async fn test_failed_writes_are_swallowed() {
        let store = JobStore::new(Arc::new(FailingWrites), Latency::none());
        let response = store.create(sample_request()).await;
        assert!(response.success);
        assert_eq!(response.data.id, "1");
    }

    #[tokio::test]
    async fn test_departments_lists_the_fixed_set() {
        let store = store_over(Arc::new(MemoryStore::new()));
        let response = store.departments().await;
        assert!(response.success);
        assert_eq!(response.data.len(), DEPARTMENTS.len());
        assert_eq!(response.data[0], "Engineering");
    }
}
