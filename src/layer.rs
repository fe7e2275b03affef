//! # Layer Trait
//!
//! Tower-style middleware composition for probes.
//!
//! ```text
//! Probe ──▶ Layer::layer() ──▶ Wrapped Probe
//! ```
//!
//! The crate ships one layer, [`TracingLayer`], which records every probe
//! call as a `tracing` event at `TRACE` level.
//!
//! ```rust
//! use scope_naming::{LayerExt, MemoryProbe, ProbeRead, TracingLayer};
//!
//! let probe = MemoryProbe::new()
//!     .with_file("/ds/image/tifR/x.tif")
//!     .layer(TracingLayer::new("fixture"));
//! assert!(probe.exists("/ds/image/tifR/x.tif").unwrap());
//! ```

use tracing::trace;

use crate::{EntryKind, Probe, ProbeDir, ProbeError, ProbeRead, ReadDirIter};

/// A layer that wraps a probe to add functionality.
///
/// # Type Parameters
///
/// - `P`: The probe type being wrapped
///
/// `layer(self, probe)` consumes both the layer and the probe. The resulting
/// `Probe` type should implement the same traits as `P`.
pub trait Layer<P> {
    /// The resulting probe type after applying this layer.
    type Probe;

    /// Wrap the given probe with this layer's functionality.
    fn layer(self, probe: P) -> Self::Probe;
}

/// Extension trait for fluent layer composition.
pub trait LayerExt: Probe + Sized {
    /// Apply a layer to this probe.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Probe {
        layer.layer(self)
    }
}

impl<P: Probe> LayerExt for P {}

/// Layer producing [`Traced`] probes.
#[derive(Debug, Clone, Copy)]
pub struct TracingLayer {
    name: &'static str,
}

impl TracingLayer {
    /// Create a layer whose events carry `probe = name`.
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for TracingLayer {
    fn default() -> Self {
        Self::new("probe")
    }
}

impl<P: Probe> Layer<P> for TracingLayer {
    type Probe = Traced<P>;

    fn layer(self, probe: P) -> Self::Probe {
        Traced {
            inner: probe,
            name: self.name,
        }
    }
}

/// Probe wrapper that logs each call.
#[derive(Debug, Clone)]
pub struct Traced<P> {
    inner: P,
    name: &'static str,
}

impl<P> Traced<P> {
    /// The wrapped probe.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap into the inner probe.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: ProbeRead> ProbeRead for Traced<P> {
    fn exists(&self, path: &str) -> Result<bool, ProbeError> {
        let result = self.inner.exists(path);
        trace!(probe = self.name, op = "exists", path, ?result);
        result
    }

    fn kind(&self, path: &str) -> Result<EntryKind, ProbeError> {
        let result = self.inner.kind(path);
        trace!(probe = self.name, op = "kind", path, ?result);
        result
    }
}

impl<P: ProbeDir> ProbeDir for Traced<P> {
    fn read_dir(&self, path: &str) -> Result<ReadDirIter, ProbeError> {
        let result = self.inner.read_dir(path);
        match &result {
            Ok(_) => trace!(probe = self.name, op = "read_dir", path, "listed"),
            Err(error) => trace!(probe = self.name, op = "read_dir", path, %error, "failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryProbe, ProbeExt};

    #[test]
    fn layer_ext_is_auto_implemented() {
        fn _check<P: Probe + LayerExt>() {}
    }

    #[test]
    fn traced_probe_delegates() {
        let probe = MemoryProbe::new()
            .with_file("/ds/a.tif")
            .layer(TracingLayer::default());
        assert!(probe.exists("/ds/a.tif").unwrap());
        assert_eq!(probe.kind("/ds").unwrap(), EntryKind::Directory);
        assert_eq!(probe.list("/ds").unwrap().len(), 1);
        assert!(probe.read_dir("/missing").is_err());
        assert_eq!(probe.into_inner().len(), 3);
    }

    #[test]
    fn layers_compose() {
        let probe = MemoryProbe::new()
            .with_file("/ds/a.tif")
            .layer(TracingLayer::new("inner"))
            .layer(TracingLayer::new("outer"));
        fn _takes_probe<T: Probe>(_: &T) {}
        _takes_probe(&probe);
        assert!(probe.inner().inner().exists("/ds/a.tif").unwrap());
    }
}
