//! Asset loading: reads one filesystem entry fully into memory, paired with
//! the path it will carry inside the pack.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::DeflateError;

/// One loaded asset, ready to be serialized as a pack record.
///
/// A record is transient: it is built for one entry, written out, and its
/// payload dropped before the next entry is loaded, so peak memory tracks
/// the largest single asset rather than the whole tree.
#[derive(Debug)]
pub struct AssetRecord {
    /// Wire path: the entry's root-relative path, `/`-separated.
    pub path: String,
    pub data: Vec<u8>,
}

impl AssetRecord {
    /// Payload length as carried in the record's size field.
    pub fn size(&self) -> i64 {
        self.data.len() as i64
    }
}

/// Loads the asset at `root.join(rel)` in full.
///
/// Fails if the entry cannot be opened, or if the number of bytes actually
/// read differs from what its metadata reported (the file changed under us,
/// or the filesystem lied). There is no retry and no partial acceptance.
pub fn load_asset(root: &Path, rel: &Path) -> Result<AssetRecord, DeflateError> {
    let abs = root.join(rel);

    let mut file = File::open(&abs).map_err(|e| DeflateError::io(&abs, e))?;
    let expected = file
        .metadata()
        .map_err(|e| DeflateError::io(&abs, e))?
        .len();

    let mut data = Vec::with_capacity(expected as usize);
    let got = file
        .read_to_end(&mut data)
        .map_err(|e| DeflateError::io(&abs, e))? as u64;

    if got != expected {
        return Err(DeflateError::ShortRead {
            path: abs,
            expected,
            got,
        });
    }

    debug!("loaded {} ({} bytes)", rel.display(), got);
    Ok(AssetRecord {
        path: wire_path(rel)?,
        data,
    })
}

/// Converts a relative entry path to its wire form. The container always
/// uses forward slashes regardless of the host platform.
fn wire_path(rel: &Path) -> Result<String, DeflateError> {
    let s = rel.to_str().ok_or_else(|| DeflateError::NonUtf8Path {
        path: rel.to_path_buf(),
    })?;
    if std::path::MAIN_SEPARATOR == '/' {
        Ok(s.to_owned())
    } else {
        Ok(s.replace(std::path::MAIN_SEPARATOR, "/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn loads_content_and_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();

        let record = load_asset(dir.path(), Path::new("a.txt")).unwrap();
        assert_eq!(record.path, "a.txt");
        assert_eq!(record.size(), 5);
        assert_eq!(record.data, b"hello");
    }

    #[test]
    fn missing_entry_is_an_io_error_with_the_path() {
        let dir = tempdir().unwrap();
        let err = load_asset(dir.path(), Path::new("gone.bin")).unwrap_err();
        match err {
            DeflateError::Io { path, .. } => {
                assert_eq!(path, dir.path().join("gone.bin"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn directory_cannot_be_loaded_as_an_asset() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        // Reading a directory either fails to open or reads zero of a
        // nonzero reported size; both surface as an error.
        assert!(load_asset(dir.path(), Path::new("sub")).is_err());
    }

    #[test]
    fn nested_wire_path_uses_forward_slashes() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/inner.dat"), b"x").unwrap();

        let rel: PathBuf = ["sub", "inner.dat"].iter().collect();
        let record = load_asset(dir.path(), &rel).unwrap();
        assert_eq!(record.path, "sub/inner.dat");
    }
}
