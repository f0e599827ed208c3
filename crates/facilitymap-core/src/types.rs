//! Type aliases for shared state.
//!
//! The editor itself is single-writer; the only cross-task sharing is between
//! the session owner and the autosave task.

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-task sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
///
/// # Example
/// ```rust,ignore
/// let session: ThreadSafe<EditorState> = thread_safe(EditorState::new());
/// session.lock().undo();
/// ```
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Wraps a value in a [`ThreadSafe`] handle.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
