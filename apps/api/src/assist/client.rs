//! Client for the external job-field extraction service.
//!
//! The service is an opaque collaborator: one endpoint, one request shape,
//! one response shape. Failures are handed back to the caller to be
//! downgraded into a user-facing message; no retry is attempted.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::jobs::models::{EmploymentType, WorkLocation};

#[derive(Debug, Error)]
pub enum FillError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("service reported success without field data")]
    MissingPayload,
}

/// Field payload returned by the extraction service and broadcast to
/// listening forms. Title and department are always present; everything
/// else is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFieldPayload {
    pub title: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<WorkLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiring_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_years_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_years_max: Option<u32>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FillRequest<'a> {
    prompt: &'a str,
    mark_confidential: bool,
}

#[derive(Debug, Deserialize)]
struct FillResponse {
    success: bool,
    data: Option<JobFieldPayload>,
    message: Option<String>,
}

/// HTTP client for `POST {origin}/fill-job-requisition`.
#[derive(Clone)]
pub struct FillClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FillClient {
    pub fn new(origin: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: format!("{}/fill-job-requisition", origin.trim_end_matches('/')),
        }
    }

    /// Sends the prompt and returns the extracted field payload.
    pub async fn fill(
        &self,
        prompt: &str,
        mark_confidential: bool,
    ) -> Result<JobFieldPayload, FillError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&FillRequest {
                prompt,
                mark_confidential,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FillError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: FillResponse = response.json().await?;
        if !body.success {
            return Err(FillError::Rejected(
                body.message
                    .unwrap_or_else(|| "Failed to generate job data".to_string()),
            ));
        }
        body.data.ok_or(FillError::MissingPayload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_formed_from_the_origin() {
        let client = FillClient::new("http://localhost:8000", Duration::from_secs(30));
        assert_eq!(client.endpoint, "http://localhost:8000/fill-job-requisition");

        let client = FillClient::new("http://localhost:8000/", Duration::from_secs(30));
        assert_eq!(client.endpoint, "http://localhost:8000/fill-job-requisition");
    }

    #[test]
    fn test_fill_request_serializes_with_wire_names() {
        let request = FillRequest {
            prompt: "Fill form for Data Engineer",
            mark_confidential: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prompt": "Fill form for Data Engineer",
                "markConfidential": false
            })
        );
    }

    #[test]
    fn test_response_payload_deserializes_with_partial_fields() {
        let body: FillResponse = serde_json::from_str(
            r#"{
                "success": true,
                "data": {
                    "title": "Data Engineer",
                    "department": "Data",
                    "location": "Remote",
                    "targetYearsMin": 3,
                    "targetYearsMax": 6,
                    "requiredSkills": ["Python", "SQL"]
                }
            }"#,
        )
        .unwrap();

        assert!(body.success);
        let payload = body.data.unwrap();
        assert_eq!(payload.title, "Data Engineer");
        assert_eq!(payload.location, Some(WorkLocation::Remote));
        assert_eq!(payload.employment_type, None);
        assert_eq!(payload.target_years_min, Some(3));
        assert_eq!(payload.required_skills, vec!["Python", "SQL"]);
        assert!(payload.nice_to_have_skills.is_empty());
    }

    #[test]
    fn test_rejection_message_is_preserved() {
        let body: FillResponse = serde_json::from_str(
            r#"{"success": false, "message": "Model unavailable"}"#,
        )
        .unwrap();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("Model unavailable"));
        assert!(body.data.is_none());
    }
}
