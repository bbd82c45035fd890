//! Main entry point for the deflation CLI app

use deflation::cli;
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::run();

    let summary = deflation::deflate_folder(&args.input_folder, &args.output_file, &args.filter())?;

    println!(
        "Deflated folder {} to {} ({} entries, {} bytes).",
        args.input_folder.display(),
        args.output_file.display(),
        summary.entries,
        summary.bytes
    );
    Ok(())
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
