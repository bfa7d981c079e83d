//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Context;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8736";

/// Default directory notes are saved in, relative to the working directory.
pub const DEFAULT_SAVE_DIR: &str = "_tmp";

/// Default directory the favicons are served from.
pub const DEFAULT_STATIC_DIR: &str = ".";

/// Default upper bound on a POST body (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8736").
    pub bind_addr: String,

    /// Directory holding one file per note.
    pub save_dir: PathBuf,

    /// Directory `favicon.ico` and `favicon.svg` are served from.
    pub static_dir: PathBuf,

    /// Largest request body accepted when saving a note.
    pub max_body_bytes: usize,
}

impl Config {
    /// Configuration rooted at `save_dir` with every other field at its default.
    pub fn with_save_dir(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            save_dir: save_dir.into(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// All variables are optional; unset or empty values use the defaults.
    ///
    /// - `NOTEPAD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8736")
    /// - `NOTEPAD_SAVE_DIR`: Note directory (default: "_tmp")
    /// - `NOTEPAD_STATIC_DIR`: Favicon directory (default: ".")
    /// - `NOTEPAD_MAX_BODY_BYTES`: Largest accepted POST body (default: 2097152)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env_or("NOTEPAD_BIND_ADDR", DEFAULT_BIND_ADDR);
        let save_dir = PathBuf::from(env_or("NOTEPAD_SAVE_DIR", DEFAULT_SAVE_DIR));
        let static_dir = PathBuf::from(env_or("NOTEPAD_STATIC_DIR", DEFAULT_STATIC_DIR));

        let max_body_bytes = match non_empty_var("NOTEPAD_MAX_BODY_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid NOTEPAD_MAX_BODY_BYTES: {raw:?}"))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            save_dir = %save_dir.display(),
            static_dir = %static_dir.display(),
            max_body_bytes,
            "notepad configuration loaded"
        );

        Ok(Self {
            bind_addr,
            save_dir,
            static_dir,
            max_body_bytes,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_string())
}
