//! # Deflate Pipeline
//!
//! The top-level sequence: crawl the input folder, refuse empty input, then
//! encode every regular file into the pack.
//!
//! The pack is encoded into a temporary file next to the destination and
//! renamed into place only when the encode succeeds, so a failure partway
//! through never leaves a truncated container behind.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::crawl::{self, EntryKind, ExtensionFilter};
use crate::encoder;
use crate::error::DeflateError;

/// What a successful [`deflate_folder`] call produced.
#[derive(Debug, Clone, Copy)]
pub struct DeflateSummary {
    /// Records written into the pack.
    pub entries: u64,
    /// Total size of the pack file in bytes.
    pub bytes: u64,
}

/// Deflates `input` into a single pack file at `output`.
///
/// Directories are crawled for ordering but never packed; only regular
/// files admitted by `filter` become records. If the input cannot be opened
/// or contains nothing packable, this fails with
/// [`DeflateError::EmptyInput`] and does not touch the filesystem at all.
pub fn deflate_folder(
    input: &Path,
    output: &Path,
    filter: &ExtensionFilter,
) -> Result<DeflateSummary, DeflateError> {
    let entries = crawl::crawl(input, filter);
    if entries.is_empty() {
        return Err(DeflateError::EmptyInput {
            root: input.to_path_buf(),
        });
    }

    let files: Vec<PathBuf> = entries
        .into_iter()
        .filter(|e| e.kind == EntryKind::File)
        .map(|e| e.rel)
        .collect();
    // A tree of empty directories crawls fine but packs nothing.
    if files.is_empty() {
        return Err(DeflateError::EmptyInput {
            root: input.to_path_buf(),
        });
    }
    debug!("packing {} files from {}", files.len(), input.display());

    // Stage in the destination directory so the final rename cannot cross
    // a filesystem boundary.
    let stage_dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(stage_dir).map_err(|e| DeflateError::io(stage_dir, e))?;

    let bytes = encoder::encode(input, &files, tmp.as_file(), output)?;

    // Success: move the finished pack into place. On the error paths above
    // the temp file is cleaned up when `tmp` drops.
    tmp.persist(output)
        .map_err(|e| DeflateError::io(output, e.error))?;

    info!(
        "deflated {} entries ({} bytes) into {}",
        files.len(),
        bytes,
        output.display()
    );
    Ok(DeflateSummary {
        entries: files.len() as u64,
        bytes,
    })
}
