//! # Native Probe
//!
//! [`Probe`](crate::Probe) backed by `std::fs`.

use std::cmp::Ordering;

use crate::path::join;
use crate::{DirEntry, EntryKind, ProbeDir, ProbeError, ProbeRead, ReadDirIter};

/// Probe over the host filesystem.
///
/// Listed entry paths are built by joining the requested directory string
/// with the entry name, using the delimiter the directory string already
/// uses. Paths are never canonicalized, so relative inputs yield relative
/// results. Listings are sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProbe;

impl NativeProbe {
    /// Create a native probe.
    pub fn new() -> Self {
        Self
    }
}

impl ProbeRead for NativeProbe {
    fn exists(&self, path: &str) -> Result<bool, ProbeError> {
        std::fs::exists(path).map_err(|e| ProbeError::io("exists", path, e))
    }

    fn kind(&self, path: &str) -> Result<EntryKind, ProbeError> {
        let meta = std::fs::metadata(path).map_err(|e| ProbeError::io("metadata", path, e))?;
        Ok(if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }
}

impl ProbeDir for NativeProbe {
    fn read_dir(&self, path: &str) -> Result<ReadDirIter, ProbeError> {
        let dir = std::fs::read_dir(path).map_err(|e| ProbeError::io("read_dir", path, e))?;

        let mut entries: Vec<Result<DirEntry, ProbeError>> = dir
            .map(|entry| -> Result<DirEntry, ProbeError> {
                let entry = entry.map_err(|e| ProbeError::io("read_dir", path, e))?;
                let name = entry.file_name().to_string_lossy().into_owned();
                // Follows symlinks, so a linked wavelength folder still counts.
                let kind = if entry.path().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Ok(DirEntry {
                    path: join(path, &name),
                    name,
                    kind,
                })
            })
            .collect();

        entries.sort_by(|a, b| match (a, b) {
            (Ok(a), Ok(b)) => a.name.cmp(&b.name),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => Ordering::Equal,
        });
        Ok(ReadDirIter::from_vec(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProbeExt;

    fn utf8(path: &std::path::Path) -> String {
        path.to_str().unwrap().to_owned()
    }

    #[test]
    fn exists_and_kind() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a.tif");
        std::fs::write(&file, b"").unwrap();

        let probe = NativeProbe::new();
        assert!(probe.exists(&utf8(&file)).unwrap());
        assert!(probe.is_file(&utf8(&file)).unwrap());
        assert!(probe.is_dir(&utf8(tmp.path())).unwrap());
        assert!(!probe.exists(&utf8(&tmp.path().join("missing.tif"))).unwrap());
    }

    #[test]
    fn read_dir_sorted_and_joined() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("b.tif"), b"").unwrap();
        std::fs::write(tmp.path().join("a.tif"), b"").unwrap();
        std::fs::create_dir(tmp.path().join("488 nm")).unwrap();

        let dir = utf8(tmp.path());
        let entries = NativeProbe.list(&dir).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["488 nm", "a.tif", "b.tif"]);
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].path, join(&dir, "a.tif"));
    }

    #[test]
    fn read_dir_missing_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = utf8(&tmp.path().join("nope"));
        assert!(matches!(
            NativeProbe.read_dir(&missing),
            Err(ProbeError::NotFound { .. })
        ));
    }
}
