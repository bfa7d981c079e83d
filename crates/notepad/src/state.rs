//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::NoteStore;

/// Shared application state available to all request handlers.
///
/// Holds no mutable data; the save directory is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Flat-file note storage rooted at `config.save_dir`.
    pub store: NoteStore,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let store = NoteStore::new(config.save_dir.clone());

        tracing::info!(
            save_dir = %store.dir().display(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            store,
        }
    }
}
