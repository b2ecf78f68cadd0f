// Centralized error handling using thiserror
//
// Storage implementations return these at the point of violation. Only the
// command layer turns an item error into a user-facing message and exit code;
// everything else (I/O, configuration) propagates as a fatal failure.

use thiserror::Error;

/// Main error type for typ-tmpl
///
/// The item variants (`NotFound`, `AlreadyExists`, `InvalidId`) carry the
/// offending identifier so callers can format their own messages.
///
/// Usage:
///     match storage.delete("note1") {
///         Err(AppError::NotFound(id)) => eprintln!("no such item: {}", id),
///         Err(err) => return Err(err),
///         Ok(()) => {}
///     }
#[derive(Debug, Error)]
pub enum AppError {
    /// Item with the given identifier is not in the store
    #[error("Item '{0}' not found")]
    NotFound(String),

    /// Item with the given identifier is already in the store
    ///
    /// `add` never overwrites; a second add for the same id yields this.
    #[error("Item '{0}' already exists")]
    AlreadyExists(String),

    /// Identifier cannot name an item (empty, `.`/`..`, or contains a path separator)
    #[error("Invalid item id '{0}'")]
    InvalidId(String),

    /// Environment or settings value failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying filesystem operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for the item taxonomy handled at the command boundary
    pub fn is_item_error(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::AlreadyExists(_) | AppError::InvalidId(_)
        )
    }

    /// Identifier carried by an item error
    pub fn id(&self) -> Option<&str> {
        match self {
            AppError::NotFound(id) | AppError::AlreadyExists(id) | AppError::InvalidId(id) => {
                Some(id)
            }
            AppError::Config(_) | AppError::Io(_) => None,
        }
    }
}

/// Type alias for Result with AppError
pub type Result<T> = std::result::Result<T, AppError>;
