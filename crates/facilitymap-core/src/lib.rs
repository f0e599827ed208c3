//! # FacilityMap Core
//!
//! Core types shared by every FacilityMap crate: the layered error model,
//! editor-wide constants, and type aliases for shared state.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{EditorError, Error, Result, StorageError};
pub use types::{thread_safe, ThreadSafe};
