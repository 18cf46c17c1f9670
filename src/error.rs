use crate::common::{ApiResponse, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MoviesError>;

#[derive(Debug, Error)]
pub enum MoviesError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Module registration failed: {message}")]
    ModuleRegistrationFailed { message: String },

    #[error("Movie with ID {id} not found.")]
    NotFound { id: String },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MoviesError {
    pub fn not_found(id: impl Into<String>) -> Self {
        MoviesError::NotFound { id: id.into() }
    }

    /// Status the failure is reported with when it reaches the HTTP layer.
    pub fn status(&self) -> StatusCode {
        match self {
            MoviesError::NotFound { .. } => StatusCode::NotFound,
            _ => StatusCode::InternalServerError,
        }
    }
}

impl axum::response::IntoResponse for MoviesError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status == StatusCode::InternalServerError {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        ApiResponse::error(status, self.to_string()).into_response()
    }
}
