//! # Fails-Soft Entry Points
//!
//! Free functions that never fail. Each maps every error onto the value
//! existing consumers expect:
//!
//! | Function | Fallback |
//! |----------|----------|
//! | [`find_second_color_channel_from_slice_image`] | input path |
//! | [`reconfigure_image_path_from_8bit_to_16bit`] | input path |
//! | [`find_second_isim_color_channel`] | `""` |
//! | [`find_second_dispim_color_channel`] | `""` |
//! | [`get_image_prefix`] | `""` |
//! | [`extract_time_from_image_file_name`] | `-1` |
//! | [`extract_plane_from_image_file_name`] | `-1` |
//!
//! The reason for a fallback is emitted as a `DEBUG` event; use the `try_*`
//! forms (or [`CompanionResolver::try_resolve`]) to inspect it.

use tracing::debug;

use crate::{
    BitDepthPathMapper, CompanionResolver, DiSpimChannelResolver, IsimChannelResolver,
    NamingError, Probe, SliceChannelResolver, extract_plane, extract_time, image_prefix,
};

/// Sentinel for "could not extract".
pub const NOT_FOUND: i32 = -1;

/// `tif/` ⇄ `tifR/` companion, or `slice_image` unchanged.
///
/// ```rust
/// use scope_naming::{MemoryProbe, find_second_color_channel_from_slice_image};
///
/// let probe = MemoryProbe::new().with_file("/ds/image/tifR/x.tif");
/// assert_eq!(
///     find_second_color_channel_from_slice_image(&probe, "/ds/image/tif/x.tif"),
///     "/ds/image/tifR/x.tif"
/// );
/// ```
pub fn find_second_color_channel_from_slice_image<P: Probe + ?Sized>(
    probe: &P,
    slice_image: &str,
) -> String {
    SliceChannelResolver::new(probe).resolve(slice_image)
}

/// 16-bit stack path for an 8-bit slice, or the input unchanged. The result
/// is not checked for existence.
pub fn reconfigure_image_path_from_8bit_to_16bit(eight_bit_path: &str) -> String {
    BitDepthPathMapper::new().resolve(eight_bit_path)
}

/// Other iSIM channel, or `""`.
pub fn find_second_isim_color_channel<P: Probe + ?Sized>(probe: &P, image: &str) -> String {
    IsimChannelResolver::new(probe).resolve(image)
}

/// Other diSPIM channel (fused or single view), or `""`.
pub fn find_second_dispim_color_channel<P: Probe + ?Sized>(probe: &P, image: &str) -> String {
    DiSpimChannelResolver::new(probe).resolve(image)
}

/// Series prefix, or `""`.
pub fn get_image_prefix(image_name: &str) -> String {
    image_prefix(image_name).unwrap_or_else(|error| {
        debug!(image_name, %error, "could not extract image prefix");
        String::new()
    })
}

/// Time index, or `-1`.
///
/// ```rust
/// use scope_naming::extract_time_from_image_file_name;
///
/// assert_eq!(extract_time_from_image_file_name("prefix_t007.TIF"), 7);
/// assert_eq!(extract_time_from_image_file_name("readme.txt"), -1);
/// ```
pub fn extract_time_from_image_file_name(filename: &str) -> i32 {
    to_sentinel(extract_time(filename), filename, "time")
}

/// Plane index, or `-1`.
pub fn extract_plane_from_image_file_name(filename: &str) -> i32 {
    to_sentinel(extract_plane(filename), filename, "plane")
}

fn to_sentinel(result: Result<u32, NamingError>, filename: &str, token: &'static str) -> i32 {
    match result.map(i32::try_from) {
        Ok(Ok(value)) => value,
        Ok(Err(_)) => {
            debug!(filename, token, "index does not fit the legacy integer range");
            NOT_FOUND
        }
        Err(error) => {
            debug!(filename, token, %error, "could not extract index");
            NOT_FOUND
        }
    }
}
