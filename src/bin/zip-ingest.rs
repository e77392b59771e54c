//! Ingest a zip archive and preview the loaded table.
//!
//! Logging is controlled through `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zip_ingest::ingestion::ingestor_for_extension;

#[derive(Debug, Parser)]
#[command(name = "zip-ingest", about = "Load the single CSV inside a zip archive")]
struct Args {
    /// Archive to ingest
    path: PathBuf,

    /// Number of rows to preview
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Print the whole table as JSON instead of a preview
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let ext = args
        .path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = ingestor_for_extension(&ext).and_then(|ingestor| ingestor.ingest(&args.path));
    let ds = match result {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&ds) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                log::error!("failed to serialize table: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", ds.head(args.rows));
    }
    ExitCode::SUCCESS
}
