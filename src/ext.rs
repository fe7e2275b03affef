//! # Extension Traits
//!
//! Convenience methods for filesystem probes.
//!
//! [`ProbeExt`] is blanket-implemented, so every [`Probe`] gets these for free.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`is_file`](ProbeExt::is_file) | Check if path is a regular file |
//! | [`is_dir`](ProbeExt::is_dir) | Check if path is a directory |
//! | [`list`](ProbeExt::list) | Collect a directory listing |

use crate::{DirEntry, EntryKind, Probe, ProbeError};

/// Extension methods for any probe.
///
/// # Example
///
/// ```rust
/// use scope_naming::{MemoryProbe, ProbeExt};
///
/// let probe = MemoryProbe::new().with_file("/ds/tifR/x.tif");
/// assert!(probe.is_dir("/ds/tifR").unwrap());
/// assert!(probe.is_file("/ds/tifR/x.tif").unwrap());
/// assert_eq!(probe.list("/ds").unwrap().len(), 1);
/// ```
pub trait ProbeExt: Probe {
    /// Check if the path points to a regular file.
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn is_file(&self, path: &str) -> Result<bool, ProbeError> {
        match self.kind(path) {
            Ok(kind) => Ok(kind == EntryKind::File),
            Err(ProbeError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a directory.
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn is_dir(&self, path: &str) -> Result<bool, ProbeError> {
        match self.kind(path) {
            Ok(kind) => Ok(kind == EntryKind::Directory),
            Err(ProbeError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Collect the immediate entries of `path`.
    fn list(&self, path: &str) -> Result<Vec<DirEntry>, ProbeError> {
        self.read_dir(path)?.collect_all()
    }
}

impl<P: Probe + ?Sized> ProbeExt for P {}
