//! Core types shared by the tokenizer, extractors, probes and resolvers.

/// Path separator used by an image path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    /// `/`
    Forward,
    /// `\`
    Back,
}

impl Delimiter {
    /// The separator character.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Forward => '/',
            Delimiter::Back => '\\',
        }
    }

    /// Detect the delimiter a path uses.
    ///
    /// `/` wins whenever it occurs at all; `\` is only reported for paths
    /// that contain no forward slash. Returns `None` for bare names.
    pub fn detect(path: &str) -> Option<Self> {
        if path.contains('/') {
            Some(Delimiter::Forward)
        } else if path.contains('\\') {
            Some(Delimiter::Back)
        } else {
            None
        }
    }
}

/// A directory layout plus filename grammar produced by one acquisition
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convention {
    /// `.../image/tif/<prefix>-t<NNN>-p<NN>.tif`
    EightBitSliceTif,
    /// `<prefix>_t<N>.TIF`
    SixteenBitTif,
    /// `<prefix>_w<digit>iSIM - <desc> - <range>_s<N>_t<N>.TIF`
    Isim,
    /// `Color1/Decon/Decon_<N>.tif`
    DiSpimFused,
    /// `SPIMA/<NNN> nm/SPIMA-<N>.tif`
    DiSpimSingleView,
    /// No known grammar matched.
    Unknown,
}

/// Type of a probed filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// A directory entry returned from a probe listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Name of the entry (final segment only).
    pub name: String,
    /// Listed directory joined with `name`, using the directory's delimiter.
    pub path: String,
    /// Type of the entry.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Every metadata token recoverable from one image path.
///
/// Built by [`FilenameTokens::parse`](crate::FilenameTokens::parse); tokens a
/// grammar does not provide are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilenameTokens {
    /// Everything before the final delimiter.
    pub directory: Option<String>,
    /// Final path segment.
    pub file_name: String,
    /// Series prefix (directory included), as from `image_prefix`.
    pub prefix: Option<String>,
    /// Time index.
    pub time: Option<u32>,
    /// Optical plane index (slice images only).
    pub plane: Option<u32>,
    /// Channel digit (`_w<d>` or `Color<d>`).
    pub channel: Option<u32>,
    /// Extension including the dot, case preserved.
    pub extension: Option<String>,
    /// Convention the path was classified as.
    pub convention: Option<Convention>,
}

#[cfg(feature = "serde")]
impl FilenameTokens {
    /// Serialize to a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON object written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
