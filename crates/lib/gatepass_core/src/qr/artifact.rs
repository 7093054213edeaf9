//! Storage seam for the scannable QR artifact.
//!
//! Rendering the actual image is a collaborator concern; the core only
//! needs the artifact's storage location to hand back to clients.

use std::path::PathBuf;

use super::QrError;

/// Persists a scannable encoding of a QR payload and reports where it
/// ended up. Implementations own the encoding; a raster QR encoder slots
/// in behind the same trait.
pub trait QrArtifactStore: Send + Sync {
    /// Store the artifact for `payload`, keyed by `token`. Returns the
    /// storage location (served to clients as-is).
    fn store(&self, token: &str, payload: &str) -> Result<String, QrError>;

    /// Best-effort removal of a previously stored artifact, used when
    /// minting fails after the artifact was written. Must tolerate the
    /// artifact being absent.
    fn discard(&self, token: &str);
}

/// Filesystem store that persists the payload text under a token-named
/// file. Stands in for an image encoder in development and tests; gate
/// scanners consume the payload string either way.
#[derive(Debug, Clone)]
pub struct PayloadFileStore {
    dir: PathBuf,
}

impl PayloadFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl QrArtifactStore for PayloadFileStore {
    fn store(&self, token: &str, payload: &str) -> Result<String, QrError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| QrError::Artifact(format!("create {}: {e}", self.dir.display())))?;
        let path = self.dir.join(format!("{token}.txt"));
        std::fs::write(&path, payload)
            .map_err(|e| QrError::Artifact(format!("write {}: {e}", path.display())))?;
        Ok(path.display().to_string())
    }

    fn discard(&self, token: &str) {
        let _ = std::fs::remove_file(self.dir.join(format!("{token}.txt")));
    }
}
