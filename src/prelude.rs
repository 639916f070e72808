pub use crate::cli::{command, run_app, run_command};
pub use crate::domain::{
    contact::{self, Contact},
    directory::{self, Directory},
};
pub use crate::errors::{AppError, MissingField, SnapshotError};
pub use crate::store::{self, ContactStore, JsonStore, MemStore};
