//! iSIM flat-directory channel pairs.

use tracing::info;

use crate::grammar::isim::{CHANNEL_MARKER, SUFFIX_MARKER};
use crate::{CompanionResolver, ImagePath, NamingError, Probe, ProbeExt};

/// Finds the other colour channel of an iSIM stack.
///
/// iSIM writes every stack of a dataset into one directory and tells the
/// channels apart by a `_w<digit>` token:
///
/// ```text
/// iSIM_image_directory/
///     KB_BV591_03192018_w1iSIM - FITC - 525-50_s1_t1.TIF
///     KB_BV591_03192018_w2iSIM - TxRed - 600-50_s1_t1.TIF
/// ```
///
/// A companion shares everything up to `_w`, everything from the `_s` that
/// follows the channel digit, and has a different digit.
#[derive(Debug, Clone)]
pub struct IsimChannelResolver<P> {
    probe: P,
}

impl<P: Probe> IsimChannelResolver<P> {
    /// Create a resolver over `probe`.
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

fn digit_at(path: &str, idx: usize) -> Option<u32> {
    path.get(idx..)?.chars().next()?.to_digit(10)
}

impl<P: Probe> CompanionResolver for IsimChannelResolver<P> {
    fn name(&self) -> &'static str {
        "isim_channel"
    }

    fn try_resolve(&self, path: &str) -> Result<String, NamingError> {
        if path.is_empty() {
            return Err(NamingError::EmptyPath);
        }
        if !self.probe.is_file(path)? {
            return Err(NamingError::ImageNotFound {
                path: path.to_owned(),
            });
        }

        let image = ImagePath::new(path);
        let (directory, name) = image.split()?;
        let marker_idx = name
            .find(CHANNEL_MARKER)
            .map(|i| image.final_segment_start() + i)
            .ok_or_else(|| NamingError::missing(CHANNEL_MARKER, name))?;
        let digit_idx = marker_idx + CHANNEL_MARKER.len();
        let channel = digit_at(path, digit_idx).ok_or_else(|| {
            NamingError::invalid(&path[marker_idx..], name, "channel marker not followed by a digit")
        })?;

        let suffix_idx = path[digit_idx..]
            .find(SUFFIX_MARKER)
            .map(|i| digit_idx + i)
            .ok_or_else(|| NamingError::missing(SUFFIX_MARKER, name))?;
        let before_channel = &path[..digit_idx];
        let after_channel = &path[suffix_idx..];

        for entry in self.probe.read_dir(directory)? {
            let entry = entry?;
            let candidate = entry.path;
            if candidate.starts_with(before_channel)
                && candidate.ends_with(after_channel)
                && digit_at(&candidate, digit_idx).is_some_and(|d| d != channel)
            {
                info!(path, companion = %candidate, "found second iSIM channel");
                return Ok(candidate);
            }
        }

        Err(NamingError::NoCompanion {
            path: path.to_owned(),
            directory: directory.to_owned(),
        })
    }

    fn fallback(&self, _path: &str) -> String {
        String::new()
    }
}
