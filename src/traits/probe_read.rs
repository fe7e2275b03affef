//! Existence checks for filesystem probes.

use crate::{EntryKind, ProbeError};

/// Point lookups against a read-only filesystem snapshot.
///
/// All methods use `&self`; probes never mutate what they observe.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn ProbeRead`.
pub trait ProbeRead: Send + Sync {
    /// Check if a path exists.
    ///
    /// Returns `Ok(true)` if the path exists, `Ok(false)` if it does not.
    /// Only returns an error for unexpected failures (e.g., I/O errors).
    fn exists(&self, path: &str) -> Result<bool, ProbeError>;

    /// Kind of the entry at `path`.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::NotFound`] if the path does not exist
    fn kind(&self, path: &str) -> Result<EntryKind, ProbeError>;
}
