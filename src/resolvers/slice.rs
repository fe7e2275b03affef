//! Sibling `tif/` and `tifR/` slice directories.

use tracing::info;

use crate::grammar::slice::{TIFR_DIR, TIF_DIR};
use crate::{CompanionResolver, Delimiter, NamingError, Probe};

/// Swaps a slice image between its `tif/` and `tifR/` directories.
///
/// The swapped path is only returned if the probe confirms it exists;
/// otherwise [`resolve`](CompanionResolver::resolve) echoes the input.
#[derive(Debug, Clone)]
pub struct SliceChannelResolver<P> {
    probe: P,
}

impl<P: Probe> SliceChannelResolver<P> {
    /// Create a resolver over `probe`.
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// The other-channel candidate for `path`, without checking existence.
    ///
    /// `tif/` is checked before `tifR/`, and only the first occurrence is
    /// replaced. Backslash paths use `\tif\` and `\tifR\`.
    pub fn candidate(path: &str) -> Result<String, NamingError> {
        let (tif, tifr) = match Delimiter::detect(path) {
            Some(Delimiter::Back) => (TIF_DIR.replace('/', "\\"), TIFR_DIR.replace('/', "\\")),
            _ => (TIF_DIR.to_owned(), TIFR_DIR.to_owned()),
        };
        if path.contains(&tif) {
            Ok(path.replacen(&tif, &tifr, 1))
        } else if path.contains(&tifr) {
            Ok(path.replacen(&tifr, &tif, 1))
        } else {
            Err(NamingError::missing(TIF_DIR, path))
        }
    }
}

impl<P: Probe> CompanionResolver for SliceChannelResolver<P> {
    fn name(&self) -> &'static str {
        "slice_channel"
    }

    fn try_resolve(&self, path: &str) -> Result<String, NamingError> {
        if path.is_empty() {
            return Err(NamingError::EmptyPath);
        }
        let candidate = Self::candidate(path)?;
        if !self.probe.exists(&candidate)? {
            return Err(NamingError::CompanionNotFound { candidate });
        }
        info!(path, companion = %candidate, "found second slice channel");
        Ok(candidate)
    }

    fn fallback(&self, path: &str) -> String {
        path.to_owned()
    }
}
