pub mod json;
pub mod memory;

use crate::domain::Directory;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use json::{JsonStore, SNAPSHOT_PATH};
pub use memory::MemStore;

/// Durable home of a [`Directory`]. `save` always replaces the whole
/// snapshot; there are no partial writes.
pub trait ContactStore {
    fn load(&self) -> Result<Directory, AppError>;

    fn save(&self, directory: &Directory) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
