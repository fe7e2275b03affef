//! # Path Tokenizer
//!
//! Splits an image path into directory, file name and extension.
//!
//! Paths arrive as plain strings written on whichever platform produced the
//! dataset, so `/` and `\` are both accepted. The last `/` is used when one is
//! present; otherwise the last `\`.

use crate::{Delimiter, NamingError};
use crate::grammar::common::PERIOD;

/// A borrowed image path with its detected delimiter.
///
/// # Example
///
/// ```rust
/// use scope_naming::{Delimiter, ImagePath};
///
/// let path = ImagePath::new("/data/ds1/image/tif/pre-t005-p01.tif");
/// assert_eq!(path.delimiter(), Some(Delimiter::Forward));
/// assert_eq!(path.file_name().unwrap(), "pre-t005-p01.tif");
/// assert_eq!(path.directory().unwrap(), "/data/ds1/image/tif");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePath<'a> {
    raw: &'a str,
    delimiter: Option<Delimiter>,
}

impl<'a> ImagePath<'a> {
    /// Wrap a path string.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            delimiter: Delimiter::detect(raw),
        }
    }

    /// The path as given.
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The delimiter the final segment is split on, if any.
    #[inline]
    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }

    /// Byte index of the last delimiter.
    pub fn last_delimiter(&self) -> Option<usize> {
        self.delimiter.and_then(|d| self.raw.rfind(d.as_char()))
    }

    /// Split into `(directory, file_name)` around the last delimiter.
    ///
    /// # Errors
    ///
    /// - [`NamingError::NoDelimiter`] if the path contains neither `/` nor `\`
    pub fn split(&self) -> Result<(&'a str, &'a str), NamingError> {
        let idx = self.last_delimiter().ok_or_else(|| NamingError::NoDelimiter {
            path: self.raw.to_owned(),
        })?;
        Ok((&self.raw[..idx], &self.raw[idx + 1..]))
    }

    /// Text after the last delimiter.
    ///
    /// # Errors
    ///
    /// - [`NamingError::NoDelimiter`] if the path contains neither `/` nor `\`
    pub fn file_name(&self) -> Result<&'a str, NamingError> {
        self.split().map(|(_, name)| name)
    }

    /// Text before the last delimiter.
    ///
    /// # Errors
    ///
    /// - [`NamingError::NoDelimiter`] if the path contains neither `/` nor `\`
    pub fn directory(&self) -> Result<&'a str, NamingError> {
        self.split().map(|(dir, _)| dir)
    }

    /// The final segment, or the whole string for a bare file name.
    pub fn final_segment(&self) -> &'a str {
        match self.last_delimiter() {
            Some(idx) => &self.raw[idx + 1..],
            None => self.raw,
        }
    }

    /// Byte offset at which [`final_segment`](Self::final_segment) starts.
    pub fn final_segment_start(&self) -> usize {
        self.last_delimiter().map_or(0, |idx| idx + 1)
    }
}

/// Extension of a file name, from the last `.` inclusive.
///
/// # Errors
///
/// - [`NamingError::NoExtension`] if the name has no `.`
pub fn extension(name: &str) -> Result<&str, NamingError> {
    name.rfind(PERIOD)
        .map(|idx| &name[idx..])
        .ok_or_else(|| NamingError::NoExtension {
            name: name.to_owned(),
        })
}

/// Join a directory and an entry name with the directory's own delimiter.
///
/// A directory without any delimiter is joined with `/`.
pub fn join(directory: &str, name: &str) -> String {
    let sep = Delimiter::detect(directory)
        .unwrap_or(Delimiter::Forward)
        .as_char();
    let mut joined = String::with_capacity(directory.len() + name.len() + 1);
    joined.push_str(directory);
    if !directory.ends_with(sep) {
        joined.push(sep);
    }
    joined.push_str(name);
    joined
}

/// ASCII case-insensitive `find`.
pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}
