use axum::{http::StatusCode, response::IntoResponse, Json};
use relay_proto::dto::ErrorResponseDto;
use thiserror::Error;

use crate::{Environment, Error};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No files were uploaded")]
    EmptyFiles,
    #[error("Too many files: at most {0} per upload")]
    TooManyFiles(usize),
    #[error("File {0} exceeds the per-file size limit")]
    FileTooLarge(String),
    #[error("File {0} is not an allowed type; only JPEG, PNG, GIF and PDF are accepted")]
    UnsupportedType(String),
    #[error("Malformed multipart request: {0}")]
    Malformed(String),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An `Error` paired with the environment it is rendered in. Internal detail
/// never leaves the relay in production mode.
pub struct ApiError {
    error: Error,
    environment: Environment,
}

impl ApiError {
    pub fn new(error: Error, environment: Environment) -> Self {
        Self { error, environment }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.error.status_code();
        let (message, detail) = if status == StatusCode::BAD_REQUEST {
            (self.error.to_string(), None)
        } else {
            let detail = if self.environment.is_production() {
                None
            } else {
                Some(self.error.to_string())
            };
            ("Internal server error".to_string(), detail)
        };
        let body = ErrorResponseDto {
            success: false,
            message,
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}
