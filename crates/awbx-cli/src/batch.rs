//! Batch extraction over a PDF file or a directory of PDFs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use awbx_core::{DocumentSummary, read_document, rows_for_document, scan_document};

/// Arguments for the batch run.
#[derive(Args)]
pub struct BatchArgs {
    /// Input PDF file or directory of PDFs
    input: PathBuf,

    /// Output CSV path (default: summary.csv in the input directory)
    output: Option<PathBuf>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("input path not found: {}", args.input.display());
    }

    let files = collect_inputs(&args.input)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&output)?;
    wtr.write_record(["filename", "mawb", "total"])?;

    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        // Per-document failures degrade to a single empty-valued row; the
        // batch itself never aborts.
        let summary = match process_document(path) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("failed to process {}: {}", path.display(), e);
                failed.push((path.clone(), e.to_string()));
                DocumentSummary::default()
            }
        };

        let filename = path.display().to_string();
        for row in rows_for_document(&filename, &summary) {
            wtr.serialize(row)?;
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    wtr.flush()?;

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(files.len() - failed.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "{} Summary written to {}",
        style("✓").green(),
        output.display()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for (path, error) in &failed {
            println!("  - {}: {}", path.display(), error);
        }
    }

    Ok(())
}

/// Enumerate input PDFs: `*.pdf` and `*.PDF` directly inside a directory
/// (non-recursive), sorted and deduplicated; a file input is taken as-is.
fn collect_inputs(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for pattern in ["*.pdf", "*.PDF"] {
        for entry in glob(&input.join(pattern).to_string_lossy())? {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => warn!("skipping unreadable path: {}", e),
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn default_output(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join("summary.csv")
    } else {
        input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"))
    }
}

fn process_document(path: &Path) -> anyhow::Result<DocumentSummary> {
    let pages = read_document(path)?;
    let summary = scan_document(&pages);

    debug!(
        "{}: {} MAWB candidate(s), total {:?}",
        path.display(),
        summary.mawbs.len(),
        summary.total.as_ref().map(|t| t.amount.as_str())
    );

    Ok(summary)
}
