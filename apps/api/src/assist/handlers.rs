use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::stream::Stream;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::envelope::ApiResponse;
use crate::state::AppState;

use super::client::{FillError, JobFieldPayload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillFormRequest {
    pub prompt: String,
    #[serde(default)]
    pub mark_confidential: bool,
}

/// POST /api/v1/assist/fill
///
/// Forwards the prompt to the extraction service and, on success, broadcasts
/// the returned fields to listening forms. Client failures are downgraded to
/// a failure envelope carrying the server message or a generic fallback.
pub async fn handle_fill(
    State(state): State<AppState>,
    Json(request): Json<FillFormRequest>,
) -> Json<ApiResponse<Option<JobFieldPayload>>> {
    match state.fill.fill(&request.prompt, request.mark_confidential).await {
        Ok(payload) => {
            let listeners = state.form_fill.publish(payload.clone());
            info!(listeners, title = %payload.title, "broadcast fill payload");
            Json(ApiResponse::ok(
                Some(payload),
                "Job requisition data generated successfully",
            ))
        }
        Err(e) => {
            warn!("fill request failed: {e}");
            Json(ApiResponse::fail(None, user_message(&e)))
        }
    }
}

/// GET /api/v1/assist/events
///
/// Server-sent event stream of fill payloads, one `fillJobForm` event per
/// broadcast. Subscribers that lag past the channel capacity skip the
/// missed payloads and continue.
pub async fn handle_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.form_fill.subscribe();
    let stream = futures::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(payload) => match Event::default().event("fillJobForm").json_data(&payload) {
                    Ok(event) => return Some((Ok(event), rx)),
                    Err(e) => {
                        warn!("failed to encode fill event: {e}");
                        continue;
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "fill event subscriber lagged");
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Maps a fill failure to the message shown in the assistant chat.
fn user_message(error: &FillError) -> String {
    match error {
        FillError::Rejected(message) => message.clone(),
        FillError::Api { message, .. } if !message.is_empty() => message.clone(),
        _ => "Failed to generate job data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_is_shown_verbatim() {
        let error = FillError::Rejected("Model unavailable".to_string());
        assert_eq!(user_message(&error), "Model unavailable");
    }

    #[test]
    fn test_api_error_with_empty_body_falls_back_to_generic() {
        let error = FillError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(user_message(&error), "Failed to generate job data");
    }

    #[test]
    fn test_missing_payload_falls_back_to_generic() {
        assert_eq!(
            user_message(&FillError::MissingPayload),
            "Failed to generate job data"
        );
    }

    #[test]
    fn test_fill_request_defaults_confidential_flag() {
        let request: FillFormRequest =
            serde_json::from_str(r#"{"prompt": "Fill form for Data Engineer"}"#).unwrap();
        assert!(!request.mark_confidential);
    }
}
