use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope shared by every endpoint.
///
/// The form collector only reads `message`; `error` carries the underlying
/// failure detail on processing and transport errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            error: None,
        }
    }

    pub fn error(message: String, error: Option<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message,
            data: None,
            error,
        }
    }
}
