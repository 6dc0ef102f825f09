//! CLI for freight-document MAWB and total extraction.

mod batch;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Extract MAWB codes and totals from freight-document PDFs into a CSV report
#[derive(Parser)]
#[command(name = "awbx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    batch: batch::BatchArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    batch::run(cli.batch)
}
