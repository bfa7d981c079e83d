//! Route definitions for the notepad service.
//!
//! ## Routes
//!
//! - `GET /favicon.ico`, `GET /favicon.svg` - Served from the static directory
//! - `POST /{id}` - Save (or, with an empty body, delete) a note
//! - `GET /{id}` - Editor page, or the raw note for `?raw=1` and CLI clients
//! - anything else - `302` to a freshly generated note

mod note;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use tower_http::services::ServeFile;

use crate::ident::NoteId;
use crate::state::AppState;

/// User-agent prefixes identifying command-line clients.
const CLI_AGENTS: &[&str] = &["curl", "wget"];

/// Build the complete notepad router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/", any(redirect_to_new_note))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .route_service("/favicon.svg", ServeFile::new(static_dir.join("favicon.svg")))
        .route(
            "/{id}",
            get(note::read_note)
                .post(note::write_note)
                .fallback(note::read_note),
        )
        .fallback(redirect_to_new_note)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Redirect to a freshly generated note.
async fn redirect_to_new_note() -> Response {
    new_note_redirect()
}

/// `302 Found` pointing at a new random identifier.
fn new_note_redirect() -> Response {
    let id = NoteId::generate();
    tracing::debug!(note = %id, "redirecting to new note");
    (StatusCode::FOUND, [(header::LOCATION, format!("/{id}"))]).into_response()
}

/// Returns `true` if the user agent is a command-line tool such as curl or wget.
fn is_cli_client(headers: &HeaderMap) -> bool {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ua| CLI_AGENTS.iter().any(|agent| ua.starts_with(agent)))
}
