//! diSPIM fused and single-view channel pairs.

use tracing::{debug, info};

use crate::grammar::dispim::{COLOR, SPIM, WAVELENGTH_DIGITS, WAVELENGTH_DIR_LEN, WAVELENGTH_SUFFIX};
use crate::{CompanionResolver, ImagePath, NamingError, Probe};

/// Finds the other colour channel of diSPIM output.
///
/// Fused output keeps one directory per channel:
///
/// ```text
/// Color1/Decon/Decon_<N>.tif
/// Color2/Decon/Decon_<N>.tif
/// ```
///
/// Single-view output keeps one directory per view, split into one
/// directory per excitation wavelength with identically named files:
///
/// ```text
/// SPIMA/488 nm/SPIMA-<N>.tif
/// SPIMA/561 nm/SPIMA-<N>.tif
/// ```
///
/// Companions stay within the same view. Fused paths are rewritten without
/// consulting the probe; single-view companions are found by listing.
#[derive(Debug, Clone)]
pub struct DiSpimChannelResolver<P> {
    probe: P,
}

impl<P: Probe> DiSpimChannelResolver<P> {
    /// Create a resolver over `probe`.
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Swap `Color1` and `Color2` at the first `Color` in `path`.
    pub fn swap_fused_channel(path: &str) -> Result<String, NamingError> {
        let digit_idx = path
            .find(COLOR)
            .map(|i| i + COLOR.len())
            .ok_or_else(|| NamingError::missing(COLOR, path))?;
        let swapped = match path[digit_idx..].chars().next() {
            Some('1') => '2',
            Some('2') => '1',
            other => {
                let token = other.map(String::from).unwrap_or_default();
                return Err(NamingError::invalid(&token, path, "Color directory must end in 1 or 2"));
            }
        };
        let mut out = String::with_capacity(path.len());
        out.push_str(&path[..digit_idx]);
        out.push(swapped);
        out.push_str(&path[digit_idx + 1..]);
        Ok(out)
    }

    fn resolve_single_view(&self, path: &str) -> Result<String, NamingError> {
        let (wavelength_dir, image_name) = ImagePath::new(path).split()?;
        let (view_dir, wavelength) = ImagePath::new(wavelength_dir).split()?;

        for entry in self.probe.read_dir(view_dir)? {
            let entry = entry?;
            if !entry.is_dir() {
                debug!(path = %entry.path, "skipping file beside wavelength directories");
                continue;
            }
            if entry.name.eq_ignore_ascii_case(wavelength) {
                continue;
            }
            if !is_wavelength_dir(&entry.name) {
                debug!(path = %entry.path, "skipping directory not named '### nm'");
                continue;
            }
            for file in self.probe.read_dir(&entry.path)? {
                let file = file?;
                if file.name.eq_ignore_ascii_case(image_name) {
                    info!(path, companion = %file.path, "found second diSPIM single-view channel");
                    return Ok(file.path);
                }
            }
        }

        Err(NamingError::NoCompanion {
            path: path.to_owned(),
            directory: view_dir.to_owned(),
        })
    }
}

/// `<digit><digit><digit> nm`, e.g. `488 nm`.
pub(crate) fn is_wavelength_dir(name: &str) -> bool {
    name.chars().count() == WAVELENGTH_DIR_LEN
        && name.ends_with(WAVELENGTH_SUFFIX)
        && name.chars().take(WAVELENGTH_DIGITS).all(|c| c.is_ascii_digit())
}

impl<P: Probe> CompanionResolver for DiSpimChannelResolver<P> {
    fn name(&self) -> &'static str {
        "dispim_channel"
    }

    fn try_resolve(&self, path: &str) -> Result<String, NamingError> {
        if path.is_empty() {
            return Err(NamingError::EmptyPath);
        }
        if path.contains(COLOR) {
            let companion = Self::swap_fused_channel(path)?;
            info!(path, companion = %companion, "derived second diSPIM fused channel");
            Ok(companion)
        } else if path.contains(SPIM) {
            self.resolve_single_view(path)
        } else {
            Err(NamingError::missing(SPIM, path))
        }
    }

    fn fallback(&self, _path: &str) -> String {
        String::new()
    }
}
