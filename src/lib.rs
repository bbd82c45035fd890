//! # Deflation Core Library
//!
//! This crate provides the core functionality for the `deflation` asset
//! packer.
//!
//! Despite the name it inherits from its packing operation,
//! [`deflate_folder`], no compression happens anywhere: the pack is a flat
//! container of verbatim file contents. The crate is write-only: there is
//! no unpacker.
//!
//! ## Key Modules
//!
//! - [`crawl`]: Walks the input folder into an ordered entry list.
//! - [`loader`]: Reads one asset fully into memory.
//! - [`encoder`]: Serializes assets into the pack container format.
//! - [`writer`]: The bounded write cache between encoder and file.
//! - [`deflate`]: The top-level crawl → validate → encode pipeline.
//! - [`cli`]: Command-line argument parsing for the `deflation` binary.

pub mod cli;
pub mod crawl;
pub mod deflate;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod writer;

pub use deflate::{deflate_folder, DeflateSummary};
pub use error::DeflateError;
