//! # Probe Traits
//!
//! The read-only filesystem capability the resolvers depend on.
//!
//! ## Layers
//!
//! ```text
//! ProbeRead (exists, kind) + ProbeDir (read_dir) = Probe
//! ```
//!
//! [`Probe`] has a blanket implementation: implement the two component traits
//! and the composite comes for free.
//!
//! ```rust
//! use scope_naming::{EntryKind, Probe, ProbeDir, ProbeError, ProbeRead, ReadDirIter};
//!
//! struct EmptyProbe;
//!
//! impl ProbeRead for EmptyProbe {
//!     fn exists(&self, _: &str) -> Result<bool, ProbeError> { Ok(false) }
//!     fn kind(&self, path: &str) -> Result<EntryKind, ProbeError> {
//!         Err(ProbeError::NotFound { path: path.to_owned() })
//!     }
//! }
//!
//! impl ProbeDir for EmptyProbe {
//!     fn read_dir(&self, _: &str) -> Result<ReadDirIter, ProbeError> {
//!         Ok(ReadDirIter::from_vec(vec![]))
//!     }
//! }
//!
//! fn use_probe<P: Probe>(_probe: &P) {}
//! use_probe(&EmptyProbe);
//! ```
//!
//! ## Object Safety
//!
//! All traits are object-safe:
//!
//! ```rust
//! use scope_naming::Probe;
//!
//! fn check(probe: &dyn Probe) -> bool {
//!     probe.exists("/data/image/tif").unwrap_or(false)
//! }
//! ```

mod probe_dir;
mod probe_read;

pub use probe_dir::{ProbeDir, ReadDirIter};
pub use probe_read::ProbeRead;

/// Read-only filesystem probe: existence checks plus directory listings.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type implementing [`ProbeRead`] and
/// [`ProbeDir`].
///
/// # Available Methods
///
/// From [`ProbeRead`]:
/// - `exists`, `kind`
///
/// From [`ProbeDir`]:
/// - `read_dir`
pub trait Probe: ProbeRead + ProbeDir {}

impl<T: ProbeRead + ProbeDir> Probe for T {}

// Borrowed probes, so resolvers can be built over `&P` as well as `P`.
impl<T: ProbeRead + ?Sized> ProbeRead for &T {
    fn exists(&self, path: &str) -> Result<bool, crate::ProbeError> {
        (**self).exists(path)
    }

    fn kind(&self, path: &str) -> Result<crate::EntryKind, crate::ProbeError> {
        (**self).kind(path)
    }
}

impl<T: ProbeDir + ?Sized> ProbeDir for &T {
    fn read_dir(&self, path: &str) -> Result<ReadDirIter, crate::ProbeError> {
        (**self).read_dir(path)
    }
}
