use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
}

/// Candidate's current stage in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStep {
    New,
    Screening,
    Interviewing,
    Offer,
    Hired,
    Rejected,
}

/// Coarse qualitative match rating assigned by screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLevel {
    Strong,
    Medium,
    Weak,
}

/// Denormalized profile snapshot attached to a CV at upload time and never
/// independently mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCvData {
    pub name: String,
    pub role: String,
    pub company: String,
    pub experience_years: u32,
    pub skills: Vec<String>,
    pub education: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_level: Option<FitLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_step: Option<PipelineStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interview_questions: Vec<String>,
}

/// An uploaded candidate resume record. CVs exist only in the context of a
/// job and only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub id: String,
    pub file_name: String,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub status: CvStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedCvData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCvStatusRequest {
    pub status: CvStatus,
}
