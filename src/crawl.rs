//! # Directory Crawling
//!
//! Walks the input folder and produces the ordered entry list the encoder
//! consumes. The walk is post-order (a directory's descendants come before
//! the directory's own path) and sorted by file name, so enumeration is
//! stable across runs and filesystems.
//!
//! An unreadable root is not an error here: it simply yields an empty list,
//! which the orchestrator reports as empty input. The same goes for
//! unreadable subtrees, which are skipped.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// What kind of filesystem object an [`Entry`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One crawled filesystem object, addressed relative to the crawl root.
#[derive(Debug, Clone)]
pub struct Entry {
    pub rel: PathBuf,
    pub kind: EntryKind,
}

/// Include policy applied to regular files during the crawl.
///
/// An empty policy admits every file. A non-empty policy admits only files
/// whose extension matches one of the listed ones (ASCII case-insensitive,
/// leading dots ignored). Directories are always listed so the entry order
/// keeps its shape regardless of policy.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    exts: Vec<String>,
}

impl ExtensionFilter {
    /// A policy that admits every regular file.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// A policy that admits only files with one of the given extensions.
    pub fn only<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = exts
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { exts }
    }

    /// Whether a file at `path` passes the policy.
    pub fn admits(&self, path: &Path) -> bool {
        if self.exts.is_empty() {
            return true;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.exts.iter().any(|a| a.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

/// Crawls `root` and returns its entries in post-order.
///
/// Both files and directories appear in the result; callers that only want
/// file contents filter on [`EntryKind`]. The root itself is not an entry.
/// Symlinks are not followed, so a link cycle cannot recurse; non-regular
/// entries (sockets, pipes, the links themselves) are omitted.
pub fn crawl(root: &Path, filter: &ExtensionFilter) -> Vec<Entry> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name();

    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let kind = if item.file_type().is_dir() {
            EntryKind::Dir
        } else if item.file_type().is_file() {
            EntryKind::File
        } else {
            continue;
        };

        // Entries are stored relative to the crawl root; walkdir only yields
        // paths under `root`, so the strip cannot fail.
        let rel = match item.path().strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };

        if kind == EntryKind::File && !filter.admits(&rel) {
            debug!("filtered out {}", rel.display());
            continue;
        }

        entries.push(Entry { rel, kind });
    }

    debug!("crawled {} entries under {}", entries.len(), root.display());
    entries
}
