//! Unified error types for the fruit stand.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::api::views::{NotFoundView, RenderHtml};

/// Unified error type for the fruit stand.
#[derive(Error, Debug)]
pub enum AppError {
    /// No fruit exists at the requested position.
    #[error("no fruit at index {id}")]
    NotFound {
        /// The requested position.
        id: usize,
    },

    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        /// Path of the seed file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Seed file is not a JSON array of fruits.
    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        /// Path of the seed file.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotFound { id } => match NotFoundView::new(*id).render_html() {
                Ok(page) => (status, page).into_response(),
                Err(e) => {
                    error!(error = %e, "failed to render not-found page");
                    (status, self.to_string()).into_response()
                }
            },
            _ => {
                error!(error = %self, "request failed");
                (status, Html("<h1>Internal Server Error</h1>")).into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
