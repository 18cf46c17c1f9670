use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Error envelope a failure turns into once it reaches the HTTP layer.
///
/// Successful handlers forward their collaborator's value as plain JSON and
/// never go through this type.
///
/// # Example
/// ```
/// use movies::common::{ApiResponse, StatusCode};
///
/// // Serializes as {"error":{"code":"NotFound",...},"success":false,...}
/// let response = ApiResponse::error(StatusCode::NotFound, "Movie with ID 9 not found.");
/// assert!(!response.success);
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub error: ApiError,

    pub success: bool,

    pub timestamp: DateTime<Utc>,

    #[serde(skip)]
    pub http_status: HttpStatusCode,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiResponse {
    /// The `code` is the `StatusCode` variant name, via `strum`'s Display.
    pub fn error(status: crate::common::StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: ApiError {
                code: status.to_string(),
                message: message.into(),
            },
            success: false,
            timestamp: Utc::now(),
            http_status: status.into(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.http_status, Json(self)).into_response()
    }
}
