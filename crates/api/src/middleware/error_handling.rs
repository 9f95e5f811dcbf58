//! # Error Handling Middleware
//!
//! Maps `CampusError` to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`, so every handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campussync_core::errors::CampusError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on anything that yields
/// a `CampusError` or an `eyre::Report`.
#[derive(Debug)]
pub struct AppError(pub CampusError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CampusError::NotFound(_) => StatusCode::NOT_FOUND,
            CampusError::Validation(_) => StatusCode::BAD_REQUEST,
            CampusError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CampusError::Authorization(_) => StatusCode::FORBIDDEN,
            CampusError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CampusError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<CampusError> for AppError {
    fn from(err: CampusError) -> Self {
        AppError(err)
    }
}

/// Wraps persistence failures as `CampusError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CampusError::Database(err))
    }
}

/// Maps a CampusError straight to an HTTP response
pub fn map_error(err: CampusError) -> Response {
    AppError(err).into_response()
}
