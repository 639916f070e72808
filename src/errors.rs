use core::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load directory from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    #[error("Failed to save directory to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    #[error("Validation failed: {0}")]
    Validation(MissingField),

    #[error("A contact named '{0}' already exists")]
    Duplicate(String),

    #[error("No contact found with the name '{0}'")]
    NotFound(String),
}

/// Low-level cause behind a failed load or save.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error while accessing the snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Required contact field that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Phone,
    /// Update called with neither a given name nor a phone number.
    Changes,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Name => write!(f, "name must not be empty"),
            MissingField::Phone => write!(f, "phone number must not be empty"),
            MissingField::Changes => {
                write!(f, "provide a new given name or phone number to update")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation(MissingField::Phone);

        assert_eq!(
            format!("{}", err),
            "Validation failed: phone number must not be empty"
        );
    }

    #[test]
    fn load_error_keeps_path_and_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::Load {
            path: PathBuf::from("annuaire.json"),
            source: SnapshotError::from(cause),
        };

        let message = format!("{}", err);
        assert!(message.starts_with("Failed to load directory from annuaire.json: "));
        assert!(message.contains("invalid snapshot JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
