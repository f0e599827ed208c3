//! Error handling for FacilityMap
//!
//! Expected editor conditions (degenerate shapes, malformed CSV rows, empty
//! undo stacks, deleting the last floor) are encoded as return values and never
//! reach these types. What remains:
//! - Storage errors (blob store reads/writes, document encoding)
//! - Editor errors (lookups of floors or entities that do not exist)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Storage error type
///
/// Raised by blob stores and by explicit save/publish.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store refused the write (quota, permissions, full disk).
    #[error("Failed to write '{key}': {reason}")]
    WriteFailed {
        /// Blob key being written.
        key: String,
        /// Reason reported by the backend.
        reason: String,
    },

    /// The backing store could not be read.
    #[error("Failed to read '{key}': {reason}")]
    ReadFailed {
        /// Blob key being read.
        key: String,
        /// Reason reported by the backend.
        reason: String,
    },

    /// The document could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Editor error type
///
/// Only raised for references that cannot exist while document invariants hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// No floor with this id
    #[error("Floor not found: {floor_id}")]
    FloorNotFound {
        /// The id that failed to resolve.
        floor_id: String,
    },

    /// No entity with this id on the floor
    #[error("Entity {entity} not found on floor {floor_id}")]
    EntityNotFound {
        /// The floor that was searched.
        floor_id: String,
        /// Description of the missing entity.
        entity: String,
    },

    /// A numeric property that cannot be stored (NaN, infinite, or out of range)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Property name.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// No template with this id in the catalog
    #[error("Unknown template: {template_id}")]
    UnknownTemplate {
        /// The requested template id.
        template_id: String,
    },
}

/// Main error type for FacilityMap
#[derive(Error, Debug)]
pub enum Error {
    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a storage error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this is an editor error
    pub fn is_editor_error(&self) -> bool {
        matches!(self, Error::Editor(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
