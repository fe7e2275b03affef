//! # Naming Grammar
//!
//! The literal markers each acquisition convention is recognised by.
//!
//! Resolvers and extractors refer to these constants only, so the whole
//! grammar can be audited here. Positions and lengths that are part of a
//! convention (the diSPIM wavelength directory shape, zero padding widths)
//! live next to the markers they qualify.

/// Markers shared by every convention.
pub mod common {
    /// Extension separator.
    pub const PERIOD: char = '.';
    /// Separator between prefix and token in diSPIM fused names.
    pub const UNDERSCORE: char = '_';
    /// Separator between prefix and token in 8-bit and diSPIM single-view names.
    pub const DASH: char = '-';
    /// Upper-case TIFF extension used by 16-bit stacks.
    pub const TIF_UPPER: &str = ".TIF";
    /// Lower-case TIFF extension used by 8-bit slices and diSPIM output.
    pub const TIF_LOWER: &str = ".tif";
}

/// Time and plane tokens.
pub mod time {
    /// 8-bit slice time marker: `-t###`.
    pub const SLICE_MARKER: &str = "-t";
    /// 16-bit stack time marker: `_t#`.
    pub const STACK_MARKER: &str = "_t";
    /// Letter that ends a 16-bit prefix.
    pub const STACK_PREFIX_END: char = 't';
    /// Plane marker used by 8-bit slices.
    pub const PLANE_MARKER: &str = "-p";
    /// Alternate plane marker.
    pub const PLANE_MARKER_ALT: &str = "_p";
    /// Largest distance from a plane marker to the extension dot (`-p###.`).
    pub const PLANE_MARKER_MAX_OFFSET: usize = 5;
    /// Minimum number of digits in a slice time token.
    pub const SLICE_TIME_MIN_DIGITS: usize = 3;
    /// Zero padding width for slice time tokens.
    pub const TIME_PAD_WIDTH: usize = 3;
    /// Zero padding width for plane tokens.
    pub const PLANE_PAD_WIDTH: usize = 2;
}

/// Sibling `tif/` and `tifR/` slice directories.
pub mod slice {
    /// First channel directory.
    pub const TIF_DIR: &str = "/tif/";
    /// Second channel directory.
    pub const TIFR_DIR: &str = "/tifR/";
    /// Nesting under which 8-bit slices sit below their 16-bit stacks.
    pub const IMAGE_TIF_DIRS: &str = "image/tif";
    /// Same nesting with delimiters on both sides, as a containment test.
    pub const IMAGE_TIF_SEGMENT: &str = "/image/tif/";
}

/// iSIM flat-directory output.
pub mod isim {
    /// Channel marker, followed by one digit.
    pub const CHANNEL_MARKER: &str = "_w";
    /// Start of the text that follows the channel description.
    pub const SUFFIX_MARKER: &str = "_s";
}

/// diSPIM fused and single-view output.
pub mod dispim {
    /// Fused channel directory stem, followed by `1` or `2`.
    pub const COLOR: &str = "Color";
    /// Single-view directory stem (`SPIMA`, `SPIMB`).
    pub const SPIM: &str = "SPIM";
    /// Suffix of a wavelength directory name.
    pub const WAVELENGTH_SUFFIX: &str = " nm";
    /// Exact length of a wavelength directory name (`488 nm`).
    pub const WAVELENGTH_DIR_LEN: usize = 6;
    /// Leading digits in a wavelength directory name.
    pub const WAVELENGTH_DIGITS: usize = 3;
}
