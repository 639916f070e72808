use super::*;

use std::cell::{Cell, RefCell};

/// Keeps the snapshot in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RefCell<Directory>,
    saves: Cell<usize>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: Directory) -> Self {
        Self {
            data: RefCell::new(directory),
            saves: Cell::new(0),
        }
    }

    /// Copy of the last saved directory.
    pub fn snapshot(&self) -> Directory {
        self.data.borrow().clone()
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Directory, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, directory: &Directory) -> Result<(), AppError> {
        *self.data.borrow_mut() = directory.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
