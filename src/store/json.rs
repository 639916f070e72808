use super::*;

use crate::errors::SnapshotError;
use std::fs::Permissions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub const SNAPSHOT_PATH: &str = "annuaire.json";

/// Snapshot stored as pretty-printed JSON at `path`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> Result<Option<Directory>, SnapshotError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            warn!(path = %self.path.display(), "snapshot is empty, starting a new directory");
            return Ok(Some(Directory::new()));
        }

        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write_snapshot(&self, directory: &Directory) -> Result<(), SnapshotError> {
        let mut data = serde_json::to_string_pretty(directory)?;
        data.push('\n');

        create_file_parent(&self.path)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Written next to the snapshot, then renamed over it.
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(data.as_bytes())?;
        if let Some(permissions) = self.snapshot_permissions()? {
            file.as_file().set_permissions(permissions)?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }

    /// Mode the replaced snapshot should keep: the current file's, or 0644
    /// for a new one (the temp file itself is created 0600).
    fn snapshot_permissions(&self) -> std::io::Result<Option<Permissions>> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(Some(meta.permissions())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(default_permissions()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(SNAPSHOT_PATH)
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Directory, AppError> {
        let directory = self
            .read_snapshot()
            .map_err(|source| AppError::Load {
                path: self.path.clone(),
                source,
            })?
            .unwrap_or_else(|| {
                debug!(path = %self.path.display(), "no snapshot found, starting a new directory");
                Directory::new()
            });

        debug!(path = %self.path.display(), contacts = directory.len(), "directory loaded");
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> Result<(), AppError> {
        self.write_snapshot(directory)
            .map_err(|source| AppError::Persist {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), contacts = directory.len(), "directory saved");
        Ok(())
    }
}
