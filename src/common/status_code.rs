use axum::http::StatusCode as HttpStatusCode;
use strum_macros::Display;

/// HTTP statuses the service reports failures with.
///
/// The variant name doubles as the machine-readable `code` of an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusCode {
    NotFound,
    InternalServerError,
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::NotFound => HttpStatusCode::NOT_FOUND,
            StatusCode::InternalServerError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
