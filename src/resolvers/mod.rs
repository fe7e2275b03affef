//! # Convention Resolvers
//!
//! One resolver per directory/filename convention. Each takes the path of a
//! known image and derives the path of its companion: the other colour
//! channel, or the 16-bit stack an 8-bit slice was cut from.
//!
//! | Resolver | Convention | Verifies existence | Fallback |
//! |----------|------------|--------------------|----------|
//! | [`SliceChannelResolver`] | `tif/` ⇄ `tifR/` | yes | input path |
//! | [`BitDepthPathMapper`] | `image/tif/` 8-bit → 16-bit | no | input path |
//! | [`IsimChannelResolver`] | iSIM `_w<digit>` | yes | empty |
//! | [`DiSpimChannelResolver`] | diSPIM `Color1`/`Color2`, `SPIMx/<NNN> nm` | single view only | empty |
//!
//! [`CompanionResolver::try_resolve`] reports why resolution failed;
//! [`CompanionResolver::resolve`] logs that reason and returns the fallback.

mod bit_depth;
mod dispim;
mod isim;
mod slice;

pub use bit_depth::BitDepthPathMapper;
pub use dispim::DiSpimChannelResolver;
pub use isim::IsimChannelResolver;
pub use slice::SliceChannelResolver;

use tracing::debug;

use crate::NamingError;

/// Derives a companion path from one image path.
///
/// # Example
///
/// ```rust
/// use scope_naming::{CompanionResolver, MemoryProbe, SliceChannelResolver};
///
/// let probe = MemoryProbe::new().with_file("/ds/image/tifR/x.tif");
/// let resolver = SliceChannelResolver::new(&probe);
/// assert_eq!(resolver.resolve("/ds/image/tif/x.tif"), "/ds/image/tifR/x.tif");
/// assert_eq!(resolver.resolve("/ds/image/tif/y.tif"), "/ds/image/tif/y.tif");
/// ```
pub trait CompanionResolver {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Resolve the companion of `path`, reporting which precondition failed.
    fn try_resolve(&self, path: &str) -> Result<String, NamingError>;

    /// Value returned by [`resolve`](Self::resolve) when resolution fails.
    fn fallback(&self, path: &str) -> String;

    /// Resolve the companion of `path`, falling back on any failure.
    fn resolve(&self, path: &str) -> String {
        match self.try_resolve(path) {
            Ok(companion) => companion,
            Err(error) => {
                debug!(resolver = self.name(), path, %error, "companion not resolved, using fallback");
                self.fallback(path)
            }
        }
    }
}
