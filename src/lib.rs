//! # scope-naming
//!
//! Naming-convention resolution and filename metadata extraction for
//! microscopy image series.
//!
//! Acquisition software writes images under fixed directory and filename
//! conventions. Given the path of one image, this crate derives:
//!
//! - the path of the companion image in the other colour channel,
//! - the 16-bit stack an 8-bit slice was cut from,
//! - the time, plane and channel indices encoded in the name,
//! - the series prefix, and the name of any other time point.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use scope_naming::{
//!     CompanionResolver, MemoryProbe, SliceChannelResolver, append_time_to_prefix,
//!     extract_time, image_prefix,
//! };
//!
//! // Pure string functions need no filesystem.
//! let image = "/ds/pre_t5.TIF";
//! assert_eq!(extract_time(image).unwrap(), 5);
//! let prefix = image_prefix(image).unwrap();
//! assert_eq!(append_time_to_prefix(&prefix, 6), "/ds/pre_t6.TIF");
//!
//! // Resolvers that verify their answer take a probe.
//! let probe = MemoryProbe::new()
//!     .with_file("/ds/image/tif/x.tif")
//!     .with_file("/ds/image/tifR/x.tif");
//! let resolver = SliceChannelResolver::new(&probe);
//! assert_eq!(resolver.resolve("/ds/image/tif/x.tif"), "/ds/image/tifR/x.tif");
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Probe`] | Read-only filesystem capability: `exists`, `kind`, `read_dir` |
//! | [`NativeProbe`] | Probe over `std::fs` |
//! | [`MemoryProbe`] | In-memory fixture probe |
//! | [`CompanionResolver`] | Derives a companion path, with a fails-soft fallback |
//! | [`FilenameTokens`] | Every token recoverable from one path |
//! | [`Convention`] | Which naming convention a path follows |
//! | [`NamingError`] | Why a derivation failed |
//!
//! ---
//!
//! ## Conventions
//!
//! | Convention | Example |
//! |------------|---------|
//! | 8-bit slice | `ds/image/tif/pre-t005-p01.tif`, red channel under `tifR/` |
//! | 16-bit stack | `ds/pre_t5.TIF` |
//! | iSIM | `pre_w1Cam_s1_t1.TIF` ⇄ `pre_w2Cam_s1_t1.TIF` |
//! | diSPIM fused | `ds/Color1/Decon/Decon_12.tif` ⇄ `ds/Color2/...` |
//! | diSPIM single view | `ds/SPIMA/488 nm/SPIMA-3.tif` ⇄ `ds/SPIMA/561 nm/SPIMA-3.tif` |
//!
//! Both `/` and `\` are accepted as delimiters. A path containing `/` is
//! split on `/`; otherwise on `\`.
//!
//! ---
//!
//! ## Error Handling
//!
//! Extractors and resolvers return `Result<_, NamingError>` naming the
//! precondition that failed:
//!
//! ```rust
//! use scope_naming::{NamingError, extract_time};
//!
//! let err = extract_time("readme.txt").unwrap_err();
//! assert!(matches!(err, NamingError::MissingMarker { .. }));
//! ```
//!
//! The [`fallback`] module keeps the fails-soft forms, which map every error
//! to the legacy value (`-1`, an empty string, or the input path) and log the
//! reason at `DEBUG`.
//!
//! ---
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; the crate installs no subscriber.
//! Wrap a probe with [`TracingLayer`] to trace every filesystem query.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`FilenameTokens`], [`Convention`], [`DirEntry`], etc. |

// Private modules
mod error;
mod ext;
mod extract;
mod layer;
mod memory;
mod native;
mod path;
mod resolvers;
mod traits;
mod types;

// Public modules
pub mod fallback;
pub mod grammar;

// Public re-exports - error types
pub use error::{NamingError, ProbeError};

// Public re-exports - core types
pub use types::{Convention, Delimiter, DirEntry, EntryKind, FilenameTokens};

// Public re-exports - path handling
pub use path::{ImagePath, extension, join};

// Public re-exports - extractors
pub use extract::{
    append_time_and_plane_to_8bit_prefix, append_time_to_prefix, append_time_to_prefixes,
    extract_channel, extract_plane, extract_time, follows_8bit_deleted_convention,
    format_plane_token, format_time_token, image_prefix, is_slice_image,
};

// Public re-exports - probe traits
pub use traits::{Probe, ProbeDir, ProbeRead, ReadDirIter};

// Public re-exports - probes
pub use memory::MemoryProbe;
pub use native::NativeProbe;

// Public re-exports - resolvers
pub use resolvers::{
    BitDepthPathMapper, CompanionResolver, DiSpimChannelResolver, IsimChannelResolver,
    SliceChannelResolver,
};

// Public re-exports - fails-soft entry points
pub use fallback::{
    extract_plane_from_image_file_name, extract_time_from_image_file_name,
    find_second_color_channel_from_slice_image, find_second_dispim_color_channel,
    find_second_isim_color_channel, get_image_prefix, reconfigure_image_path_from_8bit_to_16bit,
};

// Public re-exports - infrastructure
pub use ext::ProbeExt;
pub use layer::{Layer, LayerExt, Traced, TracingLayer};
