//! Delivery of finished artifacts.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{ReportError, ReportResult};

use super::ExportArtifact;
use super::artifact::check_plain_filename;

/// Somewhere a finished artifact can be handed off to.
pub trait ArtifactSink {
    /// What the sink reports back after a successful hand-off.
    type Receipt;

    /// Delivers the artifact. On failure nothing partial is left behind.
    fn deliver(&self, artifact: &ExportArtifact) -> ReportResult<Self::Receipt>;
}

/// Writes artifacts into a directory.
///
/// Bytes go to `<name>.part` first and are renamed into place once fully
/// written and synced. The partial file is removed on every failure path.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink that writes into `dir`. The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Removes a partially written file unless the write was committed.
struct PartialFile {
    path: PathBuf,
    committed: bool,
}

impl PartialFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if !self.committed && self.path.exists() {
            if let Err(err) = fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %err, "Failed to remove partial export");
            }
        }
    }
}

impl ArtifactSink for DirectorySink {
    type Receipt = PathBuf;

    fn deliver(&self, artifact: &ExportArtifact) -> ReportResult<PathBuf> {
        check_plain_filename(&artifact.filename)?;

        let export_error = |message: String| ReportError::ExportError {
            filename: artifact.filename.clone(),
            message,
        };

        let target = self.dir.join(&artifact.filename);
        let part_path = self.dir.join(format!("{}.part", artifact.filename));
        let guard = PartialFile::new(part_path.clone());

        let mut file = File::create(&part_path)
            .map_err(|e| export_error(format!("cannot create {}: {}", part_path.display(), e)))?;
        file.write_all(&artifact.bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| export_error(format!("cannot write {}: {}", part_path.display(), e)))?;
        drop(file);

        fs::rename(&part_path, &target)
            .map_err(|e| export_error(format!("cannot move into {}: {}", target.display(), e)))?;
        guard.commit();

        debug!(
            path = %target.display(),
            bytes = artifact.bytes.len(),
            "Delivered export"
        );
        Ok(target)
    }
}
