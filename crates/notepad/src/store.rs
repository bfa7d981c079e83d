//! Flat-file note storage.
//!
//! Each note lives in a single file named after its identifier directly
//! inside the save directory. Nothing is cached in memory; every call goes
//! to disk. Writers are not coordinated, so when two requests save the same
//! note concurrently the last write to land wins.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::ident::NoteId;

/// Note storage rooted at a save directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory notes are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the save directory (and parents) if it does not exist yet.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Load a note's stored bytes.
    ///
    /// Returns `Ok(None)` if the note has never been saved (or was deleted).
    pub async fn load(&self, id: &NoteId) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(id)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persist a note, replacing any previous content.
    ///
    /// Saving empty content deletes the note; deleting a note that does not
    /// exist is not an error.
    pub async fn save(&self, id: &NoteId, content: &[u8]) -> io::Result<()> {
        let path = self.path_for(id);

        if content.is_empty() {
            return match fs::remove_file(&path).await {
                Ok(()) => {
                    tracing::debug!(note = %id, "note deleted");
                    Ok(())
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e),
            };
        }

        self.ensure_dir().await?;
        fs::write(&path, content).await?;
        tracing::debug!(note = %id, bytes = content.len(), "note saved");
        Ok(())
    }

    fn path_for(&self, id: &NoteId) -> PathBuf {
        self.dir.join(id.as_str())
    }
}
