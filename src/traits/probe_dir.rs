//! Directory listings for filesystem probes.

use crate::{DirEntry, ProbeError};

/// Immediate-entry listings of a read-only filesystem snapshot.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn ProbeDir`.
pub trait ProbeDir: Send + Sync {
    /// List the immediate entries of a directory.
    ///
    /// Entries are yielded in name order. The outer `Result` indicates whether
    /// the directory could be opened; each item's `Result` indicates whether
    /// that specific entry could be read.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::NotFound`] if the path does not exist
    /// - [`ProbeError::NotADirectory`] if the path is not a directory
    fn read_dir(&self, path: &str) -> Result<ReadDirIter, ProbeError>;
}

/// Iterator over directory entries.
///
/// - Outer `Result` (from [`ProbeDir::read_dir`]) = "can I open this directory?"
/// - Inner `Result` (per item) = "can I read this entry?"
///
/// # Example
///
/// ```rust
/// use scope_naming::{Probe, ProbeError};
///
/// fn list_names<P: Probe>(probe: &P, dir: &str) -> Result<Vec<String>, ProbeError> {
///     let mut names = Vec::new();
///     for entry in probe.read_dir(dir)? {
///         names.push(entry?.name);
///     }
///     Ok(names)
/// }
/// ```
pub struct ReadDirIter(Box<dyn Iterator<Item = Result<DirEntry, ProbeError>> + Send + 'static>);

impl ReadDirIter {
    /// Create from any compatible iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<DirEntry, ProbeError>> + Send + 'static,
    {
        Self(Box::new(iter))
    }

    /// Create from a pre-collected vector.
    pub fn from_vec(entries: Vec<Result<DirEntry, ProbeError>>) -> Self {
        Self(Box::new(entries.into_iter()))
    }

    /// Collect all entries, short-circuiting on first error.
    pub fn collect_all(self) -> Result<Vec<DirEntry>, ProbeError> {
        self.collect()
    }
}

impl std::fmt::Debug for ReadDirIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadDirIter").finish_non_exhaustive()
    }
}

impl Iterator for ReadDirIter {
    type Item = Result<DirEntry, ProbeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
