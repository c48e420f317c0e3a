use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every store operation.
///
/// Failure is signalled by `success: false` with `data` set to a safe default
/// (`null`, `[]`), never by an error status — callers branch on `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn fail(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serializes_with_message() {
        let response = ApiResponse::ok(vec![1, 2], "Fetched successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": [1, 2],
                "success": true,
                "message": "Fetched successfully"
            })
        );
    }

    #[test]
    fn test_unit_data_serializes_as_null() {
        let response = ApiResponse::ok((), "Deleted successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);
    }

    #[test]
    fn test_fail_envelope_carries_null_default() {
        let response: ApiResponse<Option<u32>> = ApiResponse::fail(None, "Job not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Job not found");
    }
}
