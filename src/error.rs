//! Application error types and HTTP response mapping.
//!
//! Every upstream failure collapses into a fixed 500 body per route; the
//! caller never learns whether the upstream was unreachable, returned 404,
//! or sent an unexpected payload. The underlying cause goes to the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::github::GitHubError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to fetch topics")]
    Topics(#[source] GitHubError),

    #[error("failed to fetch test content")]
    TestContent(#[source] GitHubError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Topics(source) => {
                tracing::error!(error = %source, "topics request failed");
                let body = Json(json!({
                    "success": false,
                    "error": "Failed to fetch topics",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::TestContent(source) => {
                tracing::error!(error = %source, "test content request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch test content")
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
