use clap::Parser;
use std::path::PathBuf;

use crate::crawl::ExtensionFilter;

/// Deflates a folder of assets into a single flat pack file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The folder whose contents will be packed, crawled recursively.
    pub input_folder: PathBuf,

    /// The path for the output pack file (e.g. assets.pack).
    pub output_file: PathBuf,

    /// Pack only files with these extensions, e.g. --only png,wav,ttf.
    /// All regular files are packed when omitted.
    #[arg(long, value_delimiter = ',', value_name = "EXT")]
    pub only: Vec<String>,
}

impl Args {
    /// The include policy the crawler should apply.
    pub fn filter(&self) -> ExtensionFilter {
        if self.only.is_empty() {
            ExtensionFilter::allow_all()
        } else {
            ExtensionFilter::only(&self.only)
        }
    }
}

/// Parses command-line arguments and returns them.
///
/// Missing positionals are a usage error: clap reports it and exits with a
/// non-zero status before any crawling begins.
pub fn run() -> Args {
    Args::parse()
}
