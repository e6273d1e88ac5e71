// error.rs
use crate::models::ErrorBody;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Device {0} not found")]
    DeviceNotFound(String),
    /// Raised while building the registry at startup, never by a handler.
    #[error("Duplicate device id {0}")]
    DuplicateDevice(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DeviceNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateDevice(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
