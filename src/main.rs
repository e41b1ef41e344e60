use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "surface", about = "Run a Surface program")]
struct Cli {
    /// Path to the program source.
    path: PathBuf,
}

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("surface=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());

    if let Err(e) = surface::run_file(&cli.path, &mut input, &mut output) {
        debug!(error = ?e, "run failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
