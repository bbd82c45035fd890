//! # Buffered Output Writer
//!
//! [`WriteCache`] is the bounded staging buffer between the encoder and the
//! output file. Small appends coalesce in memory and go out in one write;
//! a payload at least as large as the cache skips it entirely and is handed
//! straight to the underlying writer, after any pending bytes are spilled so
//! the output order is preserved.

use std::io::{self, Write};

use tracing::trace;

/// Capacity of the staging cache.
pub const CACHE_CAPACITY: usize = 10 * 1024;

/// A write session over `W` with a fixed-capacity staging cache.
///
/// One session owns one output destination exclusively. Closing the session
/// consumes it, so writing to a closed session is a compile error rather
/// than a runtime condition.
pub struct WriteCache<W: Write> {
    inner: W,
    cache: Vec<u8>,
}

impl<W: Write> WriteCache<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            cache: Vec::with_capacity(CACHE_CAPACITY),
        }
    }

    /// Number of bytes currently staged and not yet written out.
    pub fn pending(&self) -> usize {
        self.cache.len()
    }

    /// Stages `bytes` for writing, spilling to the underlying writer as the
    /// capacity policy dictates.
    pub fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        if bytes.len() >= CACHE_CAPACITY {
            // The payload alone would fill the cache. Spill whatever is
            // pending, then bypass the cache for this payload.
            self.flush()?;
            return self.inner.write_all(bytes);
        }

        if self.cache.len() + bytes.len() >= CACHE_CAPACITY {
            self.flush()?;
        }

        self.cache.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes all pending bytes to the underlying writer and empties the
    /// cache. A full cache at this point is a bookkeeping defect in the
    /// accumulation policy, not an I/O condition.
    pub fn flush(&mut self) -> io::Result<()> {
        debug_assert!(self.cache.len() < CACHE_CAPACITY);
        if !self.cache.is_empty() {
            trace!("flushing {} cached bytes", self.cache.len());
            self.inner.write_all(&self.cache)?;
            self.cache.clear();
        }
        Ok(())
    }

    /// Flushes any remainder and returns the underlying writer.
    pub fn close(mut self) -> io::Result<W> {
        self.flush()?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}
