//! # Metadata Extractors
//!
//! Pull time, plane, channel and prefix tokens out of image file names, and
//! format indices back into tokens.
//!
//! ## Grammars
//!
//! | Convention | Example | Time | Plane |
//! |------------|---------|------|-------|
//! | 8-bit slice | `pre-t005-p01.tif` | `-t###-p` | `-p##.` |
//! | 16-bit stack | `pre_t5.TIF` | `_t#.TIF` | none |
//! | diSPIM fused | `Decon_12.tif` | digits before `.tif` | none |
//! | diSPIM single view | `SPIMA-3.tif` | digits before `.tif` | none |
//!
//! The `try_*`/`Result` forms report which precondition failed. The
//! fails-soft forms with the legacy sentinel values live in
//! [`fallback`](crate::fallback).

use crate::grammar::common::{DASH, PERIOD, TIF_LOWER, TIF_UPPER, UNDERSCORE};
use crate::grammar::{dispim, isim, slice, time};
use crate::path::{extension, find_ignore_case};
use crate::{Convention, FilenameTokens, ImagePath, NamingError};

/// Returns `true` if the final path segment carries a plane marker.
///
/// The marker (`-p` or `_p`) must start no more than five characters before
/// the extension dot, i.e. `-p###.ext` at most. A bare file name is treated
/// as its own final segment.
///
/// ```rust
/// use scope_naming::is_slice_image;
///
/// assert!(is_slice_image("/ds/image/tif/pre-t005-p01.tif"));
/// assert!(is_slice_image("foo-p03.tif"));
/// assert!(!is_slice_image("foo_t5.TIF"));
/// ```
pub fn is_slice_image(filename: &str) -> bool {
    plane_marker(ImagePath::new(filename).final_segment()).is_some()
}

/// Index of the plane marker and of the extension dot in `name`.
fn plane_marker(name: &str) -> Option<(usize, usize)> {
    let period = name.rfind(PERIOD)?;
    let stem = &name[..period];
    [(DASH, time::PLANE_MARKER), (UNDERSCORE, time::PLANE_MARKER_ALT)]
        .into_iter()
        .filter_map(|(sep, marker)| {
            let idx = stem.rfind(sep)?;
            (stem[idx..].starts_with(marker) && period - idx <= time::PLANE_MARKER_MAX_OFFSET)
                .then_some((idx, period))
        })
        .next()
}

/// Returns `true` if the image sits in an `image/tif/` directory pair, the
/// layout of datasets whose 8-bit slices were replaced by 16-bit stacks two
/// directories up.
pub fn follows_8bit_deleted_convention(path: &str) -> bool {
    path.contains(slice::IMAGE_TIF_SEGMENT)
        || path.contains(&slice::IMAGE_TIF_SEGMENT.replace('/', "\\"))
}

/// Parse an all-digit token.
fn parse_digits(token: &str, name: &str) -> Result<u32, NamingError> {
    if token.is_empty() {
        return Err(NamingError::invalid(token, name, "empty number"));
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NamingError::invalid(token, name, "expected only digits"));
    }
    token
        .parse()
        .map_err(|_| NamingError::invalid(token, name, "number out of range"))
}

/// Extract the time index from an image file name.
///
/// Three grammars are tried in priority order:
///
/// 1. `-t###-p`: the digits between the last `-t` and the last `-p`; at
///    least three digits are required.
/// 2. `_t#.TIF`: the digits between the last `_t` and the extension.
/// 3. no time marker and a `.tif` extension (diSPIM): the digits read
///    backwards from the extension up to the first `_` or `-`.
///
/// Only the final path segment is examined.
///
/// # Errors
///
/// - [`NamingError::EmptyPath`] for an empty input
/// - [`NamingError::MissingMarker`] if no grammar applies
/// - [`NamingError::InvalidToken`] if the time token is malformed
///
/// ```rust
/// use scope_naming::extract_time;
///
/// assert_eq!(extract_time("prefix_t007.TIF").unwrap(), 7);
/// assert_eq!(extract_time("prefix-t005-p01.tif").unwrap(), 5);
/// assert_eq!(extract_time("Decon_12.tif").unwrap(), 12);
/// ```
pub fn extract_time(filename: &str) -> Result<u32, NamingError> {
    if filename.is_empty() {
        return Err(NamingError::EmptyPath);
    }
    let name = ImagePath::new(filename).final_segment();

    if let (Some(t_idx), Some(p_idx)) = (
        name.rfind(time::SLICE_MARKER),
        name.rfind(time::PLANE_MARKER),
    ) {
        let start = t_idx + time::SLICE_MARKER.len();
        if p_idx < start {
            return Err(NamingError::invalid(&name[t_idx..], name, "plane marker precedes time"));
        }
        let digits = &name[start..p_idx];
        if digits.len() < time::SLICE_TIME_MIN_DIGITS {
            return Err(NamingError::invalid(digits, name, "fewer than three time digits"));
        }
        let unpadded = digits.trim_start_matches('0');
        return parse_digits(if unpadded.is_empty() { "0" } else { unpadded }, name);
    }

    if let (Some(t_idx), Some(ext_idx)) = (
        name.rfind(time::STACK_MARKER),
        find_ignore_case(name, TIF_UPPER),
    ) {
        let start = t_idx + time::STACK_MARKER.len();
        if ext_idx < start {
            return Err(NamingError::invalid(&name[t_idx..], name, "extension precedes time"));
        }
        return parse_digits(&name[start..ext_idx], name);
    }

    if name.contains(time::SLICE_MARKER) || name.contains(time::STACK_MARKER) {
        return Err(NamingError::missing(time::PLANE_MARKER, name));
    }
    let ext_idx = find_ignore_case(name, TIF_LOWER)
        .ok_or_else(|| NamingError::missing(time::STACK_MARKER, name))?;

    // Walk back from the extension. Characters other than digits and the two
    // separators are skipped.
    let mut digits = Vec::new();
    for c in name[..ext_idx].chars().rev() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c == UNDERSCORE || c == DASH {
            let token: String = digits.iter().rev().collect();
            return parse_digits(&token, name);
        }
    }
    Err(NamingError::missing("_", name))
}

/// Extract the plane index from a slice image name (`-p##.` or `_p##.`).
///
/// # Errors
///
/// - [`NamingError::MissingMarker`] if the name is not a slice image
/// - [`NamingError::InvalidToken`] if the plane token is not numeric
pub fn extract_plane(filename: &str) -> Result<u32, NamingError> {
    let name = ImagePath::new(filename).final_segment();
    let (idx, period) =
        plane_marker(name).ok_or_else(|| NamingError::missing(time::PLANE_MARKER, name))?;
    parse_digits(&name[idx + time::PLANE_MARKER.len()..period], name)
}

/// Extract the series prefix of an image: everything up to and including the
/// separator that precedes the time token. The directory part of the input
/// is kept.
///
/// - slice images: up to and including the last `-t`
/// - 16-bit stacks: up to and including the last `_t`
/// - otherwise diSPIM: up to and including the last `_` (fused) or, when the
///   name has no `_`, the last `-` (single view); the characters between it
///   and `.tif` must all be digits
///
/// Markers are only searched for in the final segment.
///
/// # Errors
///
/// - [`NamingError::EmptyPath`] for an empty input
/// - [`NamingError::MissingMarker`] if no separator precedes the time
/// - [`NamingError::NoExtension`] if a diSPIM name lacks `.tif`
/// - [`NamingError::InvalidToken`] if the diSPIM time token is not all digits
///
/// ```rust
/// use scope_naming::image_prefix;
///
/// assert_eq!(image_prefix("/ds/image/tif/pre-t005-p01.tif").unwrap(), "/ds/image/tif/pre-t");
/// assert_eq!(image_prefix("/ds/pre_t5.TIF").unwrap(), "/ds/pre_t");
/// assert_eq!(image_prefix("/ds/Color1/Decon/Decon_12.tif").unwrap(), "/ds/Color1/Decon/Decon_");
/// ```
pub fn image_prefix(image_name: &str) -> Result<String, NamingError> {
    if image_name.is_empty() {
        return Err(NamingError::EmptyPath);
    }
    let path = ImagePath::new(image_name);
    let start = path.final_segment_start();
    let name = path.final_segment();
    let keep_through = |idx: usize, len: usize| image_name[..start + idx + len].to_owned();

    if is_slice_image(name) {
        let idx = name
            .rfind(time::SLICE_MARKER)
            .ok_or_else(|| NamingError::missing(time::SLICE_MARKER, name))?;
        return Ok(keep_through(idx, time::SLICE_MARKER.len()));
    }

    if let Some(idx) = name.rfind(time::STACK_MARKER) {
        return Ok(keep_through(idx, time::STACK_MARKER.len()));
    }

    let sep_idx = name
        .rfind(UNDERSCORE)
        .or_else(|| name.rfind(DASH))
        .ok_or_else(|| NamingError::missing("_", name))?;
    let ext_idx = find_ignore_case(&name[sep_idx..], TIF_LOWER)
        .map(|i| sep_idx + i)
        .ok_or_else(|| NamingError::NoExtension {
            name: name.to_owned(),
        })?;
    parse_digits(&name[sep_idx + 1..ext_idx], name)?;
    Ok(keep_through(sep_idx, 1))
}

/// Append a time index to a 16-bit or diSPIM prefix.
///
/// A prefix ending in `t` is a 16-bit stack prefix and gets `.TIF`; any other
/// prefix is diSPIM and gets `.tif`. An empty prefix yields an empty string.
///
/// ```rust
/// use scope_naming::append_time_to_prefix;
///
/// assert_eq!(append_time_to_prefix("/ds/pre_t", 5), "/ds/pre_t5.TIF");
/// assert_eq!(append_time_to_prefix("/ds/Decon_", 12), "/ds/Decon_12.tif");
/// ```
pub fn append_time_to_prefix(prefix: &str, time: u32) -> String {
    if prefix.is_empty() {
        return String::new();
    }
    let ext = if prefix.ends_with(time::STACK_PREFIX_END) {
        TIF_UPPER
    } else {
        TIF_LOWER
    };
    format!("{prefix}{time}{ext}")
}

/// [`append_time_to_prefix`] over several channel prefixes.
pub fn append_time_to_prefixes<S: AsRef<str>>(prefixes: &[S], time: u32) -> Vec<String> {
    prefixes
        .iter()
        .map(|p| append_time_to_prefix(p.as_ref(), time))
        .collect()
}

/// Compose an 8-bit slice name: `prefix` + padded time + `-p` + padded plane
/// + `.tif`.
///
/// ```rust
/// use scope_naming::append_time_and_plane_to_8bit_prefix;
///
/// assert_eq!(append_time_and_plane_to_8bit_prefix("pre_", 5, 1), "pre_005-p01.tif");
/// assert_eq!(append_time_and_plane_to_8bit_prefix("pre-t", 150, 12), "pre-t150-p12.tif");
/// ```
pub fn append_time_and_plane_to_8bit_prefix(prefix: &str, time: u32, plane: u32) -> String {
    format!(
        "{prefix}{}{}{}{TIF_LOWER}",
        format_time_token(time),
        time::PLANE_MARKER,
        format_plane_token(plane)
    )
}

/// Zero-pad a time index to three digits; values of 100 and above are
/// written as is. Zero yields an empty token.
pub fn format_time_token(value: u32) -> String {
    if value < 1 {
        return String::new();
    }
    format!("{value:0width$}", width = time::TIME_PAD_WIDTH)
}

/// Zero-pad a plane index to two digits; values of 10 and above are written
/// as is. Zero yields an empty token.
pub fn format_plane_token(value: u32) -> String {
    if value < 1 {
        return String::new();
    }
    format!("{value:0width$}", width = time::PLANE_PAD_WIDTH)
}

/// Channel digit after `_w` (iSIM) in the final segment, or after `Color`
/// (diSPIM fused) anywhere in the path.
pub fn extract_channel(path: &str) -> Option<u32> {
    let name = ImagePath::new(path).final_segment();
    digit_after(name, isim::CHANNEL_MARKER).or_else(|| digit_after(path, dispim::COLOR))
}

fn digit_after(haystack: &str, marker: &str) -> Option<u32> {
    let idx = haystack.find(marker)? + marker.len();
    haystack[idx..].chars().next()?.to_digit(10)
}

impl Convention {
    /// Classify a path by the documented heuristics, first match wins:
    /// diSPIM fused (`Color1`/`Color2`), diSPIM single view (`SPIM`), iSIM
    /// (`_w<digit>`), 8-bit slice, 16-bit stack (`_t` + `.TIF`).
    ///
    /// ```rust
    /// use scope_naming::Convention;
    ///
    /// assert_eq!(Convention::detect("/d/Color2/Decon/Decon_1.tif"), Convention::DiSpimFused);
    /// assert_eq!(Convention::detect("/d/image/tif/a-t001-p01.tif"), Convention::EightBitSliceTif);
    /// assert_eq!(Convention::detect("/d/a_t1.TIF"), Convention::SixteenBitTif);
    /// assert_eq!(Convention::detect("/d/readme.txt"), Convention::Unknown);
    /// ```
    pub fn detect(path: &str) -> Self {
        let name = ImagePath::new(path).final_segment();
        if matches!(digit_after(path, dispim::COLOR), Some(1 | 2)) {
            Convention::DiSpimFused
        } else if path.contains(dispim::SPIM) {
            Convention::DiSpimSingleView
        } else if digit_after(name, isim::CHANNEL_MARKER).is_some() {
            Convention::Isim
        } else if is_slice_image(name) {
            Convention::EightBitSliceTif
        } else if name.contains(time::STACK_MARKER)
            && extension(name).is_ok_and(|ext| ext.eq_ignore_ascii_case(TIF_UPPER))
        {
            Convention::SixteenBitTif
        } else {
            Convention::Unknown
        }
    }
}

impl FilenameTokens {
    /// Gather every token the path's grammar provides.
    ///
    /// ```rust
    /// use scope_naming::{Convention, FilenameTokens};
    ///
    /// let tokens = FilenameTokens::parse("/ds/image/tif/pre-t005-p01.tif");
    /// assert_eq!(tokens.directory.as_deref(), Some("/ds/image/tif"));
    /// assert_eq!(tokens.time, Some(5));
    /// assert_eq!(tokens.plane, Some(1));
    /// assert_eq!(tokens.extension.as_deref(), Some(".tif"));
    /// assert_eq!(tokens.convention, Some(Convention::EightBitSliceTif));
    /// ```
    pub fn parse(path: &str) -> Self {
        let image = ImagePath::new(path);
        let file_name = image.final_segment();
        Self {
            directory: image.directory().ok().map(str::to_owned),
            file_name: file_name.to_owned(),
            prefix: image_prefix(path).ok(),
            time: extract_time(path).ok(),
            plane: extract_plane(path).ok(),
            channel: extract_channel(path),
            extension: extension(file_name).ok().map(str::to_owned),
            convention: Some(Convention::detect(path)),
        }
    }

    /// Returns `true` if the extension is `.tif` in any letter case.
    pub fn is_tiff(&self) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(TIF_LOWER))
    }
}
