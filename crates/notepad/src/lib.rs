//! Notepad - a minimal anonymous web notepad.
//!
//! Every URL path segment names a note. Opening it shows an editor page whose
//! inline script saves changes back to the same URL in the background; the
//! note itself is a single flat file in the save directory.
//!
//! # Architecture
//!
//! - **Ident**: validates and generates note identifiers
//! - **Store**: one file per note, no cache, last write wins
//! - **Decode**: form-encoded vs raw request bodies, legacy display cleanup
//! - **Render**: the editor page, with all dynamic values HTML-escaped
//! - **Routes**: axum handlers tying the above together
//!
//! # URL Pattern
//!
//! ```text
//! GET  /{id}          editor page
//! GET  /{id}?raw=1    stored bytes as text/plain (also for curl/wget)
//! POST /{id}          save; an empty body deletes the note
//! ```
//!
//! Any path that is not a valid identifier redirects to a fresh random note.

pub mod config;
pub mod decode;
pub mod error;
pub mod ident;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
