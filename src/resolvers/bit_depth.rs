//! 8-bit slice to 16-bit stack path mapping.

use tracing::info;

use crate::grammar::common::{DASH, UNDERSCORE};
use crate::grammar::slice::IMAGE_TIF_DIRS;
use crate::grammar::time::{PLANE_MARKER, SLICE_MARKER, STACK_PREFIX_END};
use crate::path::extension;
use crate::{CompanionResolver, Delimiter, ImagePath, NamingError};

/// Maps an 8-bit slice path to the 16-bit stack it was cut from.
///
/// Expects the layout
///
/// ```text
/// <dataset>/
///     image/
///         tif/
///             <prefix>-t<NNN>-p<NN>.tif
///     <prefix>_t<N>.TIF
/// ```
///
/// The derived path is **not** checked for existence; callers verify it.
///
/// ```rust
/// use scope_naming::{BitDepthPathMapper, CompanionResolver};
///
/// let mapper = BitDepthPathMapper::new();
/// assert_eq!(
///     mapper.resolve("/data/ds1/image/tif/pre-t005-p01.tif"),
///     "/data/ds1/pre_t5.TIF"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BitDepthPathMapper;

impl BitDepthPathMapper {
    /// Create a mapper.
    pub fn new() -> Self {
        Self
    }

    /// Compose the 16-bit file name for an 8-bit slice file name.
    ///
    /// The part before the plane marker is cut one character short before the
    /// shared prefix is searched for, so `pre-t005-p01.tif` yields the prefix
    /// from `pre-t00`. Datasets in the wild depend on this. The cut falls on a
    /// character boundary.
    pub fn stack_file_name(name: &str) -> Result<String, NamingError> {
        let plane_idx = name
            .find(PLANE_MARKER)
            .filter(|&i| i > 0)
            .ok_or_else(|| NamingError::missing(PLANE_MARKER, name))?;
        let no_plane = name[..plane_idx]
            .char_indices()
            .next_back()
            .map_or("", |(i, _)| &name[..i]);

        let ext = extension(name)?.to_ascii_uppercase();

        let dash_idx = no_plane
            .rfind(DASH)
            .filter(|&i| i > 0)
            .ok_or_else(|| NamingError::missing("-", name))?;
        let prefix = &no_plane[..dash_idx];

        let t_idx = name
            .rfind(SLICE_MARKER)
            .filter(|&i| i > 0)
            .ok_or_else(|| NamingError::missing(SLICE_MARKER, name))?;
        let digits_start = t_idx + SLICE_MARKER.len();
        if digits_start >= plane_idx {
            return Err(NamingError::invalid(&name[t_idx..], name, "no digits before plane marker"));
        }
        let digits = &name[digits_start..plane_idx];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NamingError::invalid(digits, name, "expected only digits"));
        }
        let time = match digits.trim_start_matches('0') {
            "" => "0",
            significant => significant,
        };

        Ok(format!("{prefix}{UNDERSCORE}{STACK_PREFIX_END}{time}{ext}"))
    }
}

impl CompanionResolver for BitDepthPathMapper {
    fn name(&self) -> &'static str {
        "bit_depth"
    }

    fn try_resolve(&self, path: &str) -> Result<String, NamingError> {
        if path.is_empty() {
            return Err(NamingError::EmptyPath);
        }
        let image = ImagePath::new(path);
        let stack_name = Self::stack_file_name(image.file_name()?)?;

        let nesting = match image.delimiter() {
            Some(Delimiter::Back) => IMAGE_TIF_DIRS.replace('/', "\\"),
            _ => IMAGE_TIF_DIRS.to_owned(),
        };
        let dataset_end = path
            .find(&nesting)
            .filter(|&i| i > 0)
            .ok_or_else(|| NamingError::missing(IMAGE_TIF_DIRS, path))?;

        let stack = format!("{}{stack_name}", &path[..dataset_end]);
        info!(path, stack = %stack, "derived 16-bit stack path");
        Ok(stack)
    }

    fn fallback(&self, path: &str) -> String {
        path.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_slice_to_stack() {
        let mapper = BitDepthPathMapper::new();
        assert_eq!(
            mapper.try_resolve("/data/ds1/image/tif/pre-t005-p01.tif").unwrap(),
            "/data/ds1/pre_t5.TIF"
        );
    }

    #[test]
    fn keeps_underscored_prefix() {
        let mapper = BitDepthPathMapper::new();
        assert_eq!(
            mapper
                .resolve("/d/09082016_lineage/image/tif/KB_BV395_09082016_1_s1-t001-p01.tif"),
            "/d/09082016_lineage/KB_BV395_09082016_1_s1_t1.TIF"
        );
    }

    #[test]
    fn unpadded_time_tokens() {
        assert_eq!(
            BitDepthPathMapper::stack_file_name("emb-t120-p07.tif").unwrap(),
            "emb_t120.TIF"
        );
        assert_eq!(
            BitDepthPathMapper::stack_file_name("emb-t050-p07.tif").unwrap(),
            "emb_t50.TIF"
        );
    }

    #[test]
    fn relative_paths() {
        assert_eq!(
            BitDepthPathMapper.resolve("ds/image/tif/pre-t010-p02.tif"),
            "ds/pre_t10.TIF"
        );
    }

    #[test]
    fn backslash_paths() {
        assert_eq!(
            BitDepthPathMapper.resolve("C:\\ds\\image\\tif\\pre-t005-p01.tif"),
            "C:\\ds\\pre_t5.TIF"
        );
    }

    #[test]
    fn failures_echo_input() {
        let mapper = BitDepthPathMapper::new();
        for path in [
            "pre-t005-p01.tif",
            "/ds/image/tif/pre_t5.TIF",
            "/ds/image/tif/pre-t005-p01",
            "/ds/image/tif/t005-p01.tif",
            "/ds/other/pre-t005-p01.tif",
            "",
        ] {
            assert!(mapper.try_resolve(path).is_err(), "{path}");
            assert_eq!(mapper.resolve(path), path);
        }
    }

    #[test]
    fn non_ascii_names() {
        let mapper = BitDepthPathMapper::new();
        for path in [
            "/ds/image/tif/embryo-t00µ-p01.tif",
            "/d/image/tif/é-p01.tif",
        ] {
            assert!(mapper.try_resolve(path).is_err(), "{path}");
            assert_eq!(mapper.resolve(path), path);
        }
        assert_eq!(
            mapper.resolve("/ds/image/tif/µembryo-t005-p01.tif"),
            "/ds/µembryo_t5.TIF"
        );
    }

    #[test]
    fn failure_reasons() {
        let mapper = BitDepthPathMapper::new();
        assert!(matches!(
            mapper.try_resolve("pre-t005-p01.tif"),
            Err(NamingError::NoDelimiter { .. })
        ));
        assert!(matches!(
            mapper.try_resolve("/ds/image/tif/pre_t5.TIF"),
            Err(NamingError::MissingMarker { marker: "-p", .. })
        ));
        assert!(matches!(
            mapper.try_resolve("/ds/other/pre-t005-p01.tif"),
            Err(NamingError::MissingMarker { marker: "image/tif", .. })
        ));
    }
}
