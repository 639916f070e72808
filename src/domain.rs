pub mod contact;
pub mod directory;

use crate::errors::{AppError, MissingField};

pub use contact::Contact;
pub use directory::Directory;
