//! # Pack Container Encoding
//!
//! The container is deliberately flat: an 8-byte record count, then one
//! record per asset back-to-back. No magic number, no footer, no checksum.
//!
//! ```text
//! offset 0:       i64 LE  asset count
//! repeated:
//!   [256 bytes]   path        (UTF-8, '/'-separated, zero-padded)
//!   [8 bytes]     i64 LE size
//!   [size bytes]  raw content (verbatim, uncompressed)
//! ```
//!
//! Paths longer than 255 bytes do not fit the fixed field and are rejected
//! with [`DeflateError::PathTooLong`]; the field always keeps at least one
//! NUL terminator.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DeflateError;
use crate::loader::{self, AssetRecord};
use crate::writer::WriteCache;

/// Width of the fixed path field in every record.
pub const PATH_FIELD_LEN: usize = 256;
/// Longest wire path a record can carry; one byte stays reserved for the
/// NUL terminator.
pub const MAX_PATH_LEN: usize = PATH_FIELD_LEN - 1;
/// Width of the count header and of every record's size field.
pub const SIZE_FIELD_LEN: usize = 8;

/// Serializes records through a [`WriteCache`] session.
///
/// The session owns its destination for the whole encode; [`finish`] closes
/// it and reports the total bytes emitted.
///
/// [`finish`]: PackEncoder::finish
pub struct PackEncoder<W: Write> {
    cache: WriteCache<W>,
    /// Destination path, carried for error attribution only.
    out_path: PathBuf,
    bytes_written: u64,
}

impl<W: Write> PackEncoder<W> {
    pub fn new(inner: W, out_path: PathBuf) -> Self {
        Self {
            cache: WriteCache::new(inner),
            out_path,
            bytes_written: 0,
        }
    }

    /// Writes the count header: how many records follow.
    pub fn write_header(&mut self, count: i64) -> Result<(), DeflateError> {
        self.append(&count.to_le_bytes())
    }

    /// Writes one record: fixed path field, size field, raw content.
    pub fn write_record(&mut self, record: &AssetRecord) -> Result<(), DeflateError> {
        let path_bytes = record.path.as_bytes();
        if path_bytes.len() > MAX_PATH_LEN {
            return Err(DeflateError::PathTooLong {
                path: PathBuf::from(&record.path),
                len: path_bytes.len(),
            });
        }

        let mut field = [0u8; PATH_FIELD_LEN];
        field[..path_bytes.len()].copy_from_slice(path_bytes);
        self.append(&field)?;
        self.append(&record.size().to_le_bytes())?;
        self.append(&record.data)?;

        debug!("packed {} ({} bytes)", record.path, record.size());
        Ok(())
    }

    /// Flushes and closes the session, returning total bytes emitted.
    pub fn finish(self) -> Result<u64, DeflateError> {
        let out_path = self.out_path;
        self.cache
            .close()
            .map_err(|e| DeflateError::io(&out_path, e))?;
        Ok(self.bytes_written)
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), DeflateError> {
        self.cache
            .append(bytes)
            .map_err(|e| DeflateError::io(&self.out_path, e))?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }
}

/// Encodes `files` (paths relative to `root`, in crawl order) into `out`.
///
/// Loads one asset at a time and drops its payload as soon as the record is
/// written. Any load or write failure aborts the whole encode; the caller
/// decides what happens to the partially written destination.
pub fn encode<W: Write>(
    root: &Path,
    files: &[PathBuf],
    out: W,
    out_path: &Path,
) -> Result<u64, DeflateError> {
    let mut encoder = PackEncoder::new(out, out_path.to_path_buf());
    encoder.write_header(files.len() as i64)?;
    for rel in files {
        let record = loader::load_asset(root, rel)?;
        encoder.write_record(&record)?;
    }
    encoder.finish()
}
