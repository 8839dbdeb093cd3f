use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use net_sheet_dump::report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::run(Path::new(report::DEFAULT_FILE), &mut out);
    let _ = out.flush();

    Ok(())
}
