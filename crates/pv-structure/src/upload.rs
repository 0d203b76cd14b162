//! Scoped on-disk copy of an uploaded structure file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Result, StructureError};

const UPLOAD_PREFIX: &str = "pv-upload-";
const UPLOAD_SUFFIX: &str = ".pdb";

/// Upload bytes persisted under a unique temporary path.
///
/// The file is removed when the value is dropped or [`close`](Self::close)d,
/// whichever comes first, so every exit path of a parse cleans up.
#[derive(Debug)]
pub struct ScopedUpload {
    file: NamedTempFile,
}

impl ScopedUpload {
    /// Write `bytes` to a fresh temporary file in the system temp directory.
    pub fn create(bytes: &[u8]) -> Result<Self> {
        Self::create_in(&std::env::temp_dir(), bytes)
    }

    /// Write `bytes` to a fresh temporary file inside `dir`.
    pub fn create_in(dir: &Path, bytes: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(UPLOAD_PREFIX)
            .suffix(UPLOAD_SUFFIX)
            .tempfile_in(dir)
            .map_err(|source| StructureError::Upload { source })?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|source| StructureError::Upload { source })?;
        debug!(path = %file.path().display(), bytes = bytes.len(), "staged upload");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the file now, logging instead of failing if removal errors.
    pub fn close(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => debug!(path = %path.display(), "removed staged upload"),
            Err(error) => warn!(path = %path.display(), %error, "failed to remove staged upload"),
        }
    }
}
