//! Error types for the notepad service.
//!
//! Every failure surfaces to the client as a bare `500` with a generic
//! plain-text body; the detail only goes to the log.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Notepad service error type.
#[derive(Debug, thiserror::Error)]
pub enum NotepadError {
    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// Reading, writing, or deleting a note file failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for NotepadError {
    fn into_response(self) -> Response {
        match &self {
            Self::BodyRead(msg) => {
                tracing::error!(error = %msg, "request body read failed");
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, kind = ?err.kind(), "note storage failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "Error",
        )
            .into_response()
    }
}
