// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types: upstream fetch failures and the server's own HTTP errors.

use crate::views::layout::{self, Shell};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Failure of the single upstream GET issued by a view.
///
/// The `Display` text is what the view's error state shows to the user.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, connection, TLS or malformed-URL failure.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Upstream body was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Application error type that converts to HTML error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(path) => {
                tracing::debug!(path = %path, "Not found");
                (StatusCode::NOT_FOUND, format!("Nothing lives at {}.", path))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side.".to_string(),
                )
            }
        };

        let body = layout::error_page(&Shell::default(), status, &message);
        (status, Html(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
