use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the role is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkLocation {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Paused,
    Closed,
}

/// An open position record driving the hiring workflow.
///
/// `id` is a decimal string, unique within the persisted snapshot and
/// assigned as `max(existing) + 1` at creation. `created_at` never changes
/// after creation; `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequisition {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: WorkLocation,
    pub employment_type: EmploymentType,
    pub hiring_manager: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_years_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_years_max: Option<u32>,
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a requisition. Shape-only validation; `min <= max`
/// for target years is expected but not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub department: String,
    pub location: WorkLocation,
    pub employment_type: EmploymentType,
    pub hiring_manager: String,
    pub target_years_min: Option<u32>,
    pub target_years_max: Option<u32>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: JobStatus,
}

/// Departments offered in the create-requisition form.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
    "Analytics",
    "Customer Success",
];

/// Example requisitions served when no snapshot has been persisted yet.
pub fn seed_jobs() -> Vec<JobRequisition> {
    vec![
        JobRequisition {
            id: "1".to_string(),
            title: "Senior Backend Engineer".to_string(),
            department: "Engineering".to_string(),
            location: WorkLocation::Remote,
            employment_type: EmploymentType::FullTime,
            hiring_manager: "Sarah Johnson".to_string(),
            target_years_min: Some(5),
            target_years_max: Some(8),
            required_skills: skills(&["Python", "Django", "PostgreSQL", "AWS", "Docker"]),
            nice_to_have_skills: skills(&["Kubernetes", "Redis", "GraphQL"]),
            status: JobStatus::Active,
            candidate_count: Some(12),
            created_at: ts("2025-01-15T10:00:00Z"),
            updated_at: ts("2025-01-15T10:00:00Z"),
        },
        JobRequisition {
            id: "2".to_string(),
            title: "Product Manager".to_string(),
            department: "Product".to_string(),
            location: WorkLocation::Hybrid,
            employment_type: EmploymentType::FullTime,
            hiring_manager: "Michael Chen".to_string(),
            target_years_min: Some(4),
            target_years_max: Some(7),
            required_skills: skills(&["Product Strategy", "Agile", "Analytics", "User Research"]),
            nice_to_have_skills: skills(&["SQL", "Figma", "Data Analysis"]),
            status: JobStatus::Active,
            candidate_count: Some(8),
            created_at: ts("2025-01-10T14:30:00Z"),
            updated_at: ts("2025-01-10T14:30:00Z"),
        },
        JobRequisition {
            id: "3".to_string(),
            title: "Frontend Developer".to_string(),
            department: "Engineering".to_string(),
            location: WorkLocation::Onsite,
            employment_type: EmploymentType::FullTime,
            hiring_manager: "Emily Davis".to_string(),
            target_years_min: Some(3),
            target_years_max: Some(6),
            required_skills: skills(&["React", "TypeScript", "CSS", "Next.js"]),
            nice_to_have_skills: skills(&["GraphQL", "Testing", "Accessibility"]),
            status: JobStatus::Active,
            candidate_count: Some(15),
            created_at: ts("2025-01-05T09:15:00Z"),
            updated_at: ts("2025-01-05T09:15:00Z"),
        },
        JobRequisition {
            id: "4".to_string(),
            title: "Data Scientist".to_string(),
            department: "Data".to_string(),
            location: WorkLocation::Remote,
            employment_type: EmploymentType::FullTime,
            hiring_manager: "David Kim".to_string(),
            target_years_min: Some(4),
            target_years_max: Some(8),
            required_skills: skills(&["Python", "Machine Learning", "SQL", "TensorFlow"]),
            nice_to_have_skills: skills(&["PyTorch", "Spark", "Deep Learning"]),
            status: JobStatus::Paused,
            candidate_count: Some(6),
            created_at: ts("2024-12-20T11:00:00Z"),
            updated_at: ts("2024-12-20T11:00:00Z"),
        },
        JobRequisition {
            id: "5".to_string(),
            title: "DevOps Engineer".to_string(),
            department: "Engineering".to_string(),
            location: WorkLocation::Remote,
            employment_type: EmploymentType::FullTime,
            hiring_manager: "Sarah Johnson".to_string(),
            target_years_min: Some(4),
            target_years_max: Some(8),
            required_skills: skills(&["AWS", "Kubernetes", "Terraform", "CI/CD"]),
            nice_to_have_skills: skills(&["GCP", "Ansible", "Prometheus"]),
            status: JobStatus::Active,
            candidate_count: Some(9),
            created_at: ts("2024-12-18T08:45:00Z"),
            updated_at: ts("2024-12-18T08:45:00Z"),
        },
    ]
}

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed timestamp is valid RFC 3339")
        .with_timezone(&Utc)
}
