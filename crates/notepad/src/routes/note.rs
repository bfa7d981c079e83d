//! Note read and write handlers.
//!
//! Handles every method on `/{id}`: `POST` saves, anything else reads.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::{is_cli_client, new_note_redirect};
use crate::decode;
use crate::error::NotepadError;
use crate::ident::NoteId;
use crate::render;
use crate::state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Save a note from the request body.
///
/// Empty content deletes the note. CLI clients get `OK` back so a shell
/// pipeline has something to print; browsers get an empty `200`.
pub async fn write_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, NotepadError> {
    let Some(id) = parse_id(path) else {
        return Ok(new_note_redirect());
    };

    let body = body.map_err(|e| NotepadError::BodyRead(e.body_text()))?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let content = decode::decode_body(content_type, &body);

    state.store.save(&id, &content).await?;

    if is_cli_client(&headers) {
        Ok((StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], "OK").into_response())
    } else {
        Ok(StatusCode::OK.into_response())
    }
}

/// Read a note, either as the raw stored bytes or as the editor page.
pub async fn read_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, NotepadError> {
    let Some(id) = parse_id(path) else {
        return Ok(new_note_redirect());
    };

    let stored = state.store.load(&id).await?;

    if raw_requested(query.as_deref()) || is_cli_client(&headers) {
        return Ok(match stored {
            Some(bytes) => {
                (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], bytes).into_response()
            }
            None => StatusCode::NOT_FOUND.into_response(),
        });
    }

    let content = stored
        .map(|bytes| decode::legacy_cleanup(&String::from_utf8_lossy(&bytes)))
        .unwrap_or_default();
    let html = render::render_note_page(id.as_str(), &content).into_string();

    Ok(build_html_response(html))
}

fn parse_id(path: Result<Path<String>, PathRejection>) -> Option<NoteId> {
    path.ok().and_then(|Path(segment)| NoteId::parse(&segment))
}

/// Returns `true` if the query string carries a non-empty `raw` parameter.
fn raw_requested(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == "raw")
            .is_some_and(|(_, value)| !value.is_empty())
    })
}

/// Build an HTML response with the editor's security headers.
fn build_html_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    (StatusCode::OK, headers, html).into_response()
}
