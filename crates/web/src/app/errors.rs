use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use greenwave_core::CatalogError;
use greenwave_motion::MotionError;

pub fn catalog_error_to_response(err: CatalogError) -> Response {
    match err {
        CatalogError::NotFound => json_error(StatusCode::NOT_FOUND, err.code(), err.to_string()),
        CatalogError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, err.code(), err.to_string()),
        CatalogError::DuplicateId(_) | CatalogError::EmptyGallery(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.to_string())
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// A page could not be assembled.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("motion registration failed: {0}")]
    Motion(#[from] MotionError),

    #[error("motion plan serialization failed: {0}")]
    Plan(#[from] serde_json::Error),
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page render failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!DOCTYPE html><html lang=\"en\"><head><title>Server Error</title></head><body><p>Something went wrong. Please try again.</p></body></html>"),
        )
            .into_response()
    }
}
