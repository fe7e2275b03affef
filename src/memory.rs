//! # In-Memory Probe
//!
//! A fixed filesystem snapshot held in memory, for exercising resolvers
//! without touching disk.
//!
//! Paths are stored exactly as inserted (trailing delimiters trimmed), so the
//! entries a listing yields carry the same delimiter style the fixture was
//! written with. Inserting a path registers every ancestor directory.

use std::collections::BTreeMap;

use crate::{DirEntry, EntryKind, ImagePath, ProbeDir, ProbeError, ProbeRead, ReadDirIter};

/// In-memory probe fixture.
///
/// # Example
///
/// ```rust
/// use scope_naming::{MemoryProbe, ProbeRead};
///
/// let probe = MemoryProbe::new()
///     .with_file("/ds/image/tif/x.tif")
///     .with_file("/ds/image/tifR/x.tif");
/// assert!(probe.exists("/ds/image/tifR/x.tif").unwrap());
/// assert!(probe.exists("/ds/image").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryProbe {
    entries: BTreeMap<String, EntryKind>,
}

impl MemoryProbe {
    /// Create a snapshot holding only the root directory.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(String::new(), EntryKind::Directory);
        Self { entries }
    }

    /// Builder form of [`insert_file`](Self::insert_file).
    pub fn with_file(mut self, path: &str) -> Self {
        self.insert_file(path);
        self
    }

    /// Builder form of [`insert_dir`](Self::insert_dir).
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert_dir(path);
        self
    }

    /// Add a regular file and its ancestor directories.
    pub fn insert_file(&mut self, path: &str) {
        self.insert(path, EntryKind::File);
    }

    /// Add a directory and its ancestors.
    pub fn insert_dir(&mut self, path: &str) {
        self.insert(path, EntryKind::Directory);
    }

    /// Number of entries, root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if only the root is present.
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    fn insert(&mut self, path: &str, kind: EntryKind) {
        let key = normalize(path);
        let mut current = key;
        while let Ok(parent) = ImagePath::new(current).directory() {
            self.entries
                .entry(normalize(parent).to_owned())
                .or_insert(EntryKind::Directory);
            current = parent;
        }
        self.entries.insert(key.to_owned(), kind);
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
}

impl ProbeRead for MemoryProbe {
    fn exists(&self, path: &str) -> Result<bool, ProbeError> {
        Ok(self.entries.contains_key(normalize(path)))
    }

    fn kind(&self, path: &str) -> Result<EntryKind, ProbeError> {
        self.entries
            .get(normalize(path))
            .copied()
            .ok_or_else(|| ProbeError::NotFound {
                path: path.to_owned(),
            })
    }
}

impl ProbeDir for MemoryProbe {
    fn read_dir(&self, path: &str) -> Result<ReadDirIter, ProbeError> {
        let key = normalize(path);
        match self.entries.get(key) {
            None => {
                return Err(ProbeError::NotFound {
                    path: path.to_owned(),
                });
            }
            Some(EntryKind::File) => {
                return Err(ProbeError::NotADirectory {
                    path: path.to_owned(),
                });
            }
            Some(EntryKind::Directory) => {}
        }

        let entries = self
            .entries
            .iter()
            .filter(|(p, _)| !p.is_empty())
            .filter_map(|(p, kind)| {
                let (dir, name) = ImagePath::new(p).split().ok()?;
                (normalize(dir) == key).then(|| {
                    Ok(DirEntry {
                        name: name.to_owned(),
                        path: p.clone(),
                        kind: *kind,
                    })
                })
            })
            .collect();
        Ok(ReadDirIter::from_vec(entries))
    }
}
