//! Batch processing command for multiple claim documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use claimscan_core::{
    ClaimExtractor, ClaimScanConfig, DocumentKind, ExtractionResult, NativeDocumentReader,
    RuleBasedExtractor,
};

use super::output::{csv_row, format_result, OutputFormat, CSV_HEADER};
use super::{load_config, OcrArgs};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching input files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(flatten)]
    ocr: OcrArgs,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let started_at = Utc::now();

    let config = args.ocr.apply(load_config(config_path)?);
    config.validate()?;

    let files = collect_files(&args.input)?;

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let worker = move |path: &Path| process_single_file(path, &config);
    let results =
        match process_files(&files, args.jobs, args.continue_on_error, worker, &overall_pb).await {
            Ok(results) => results,
            Err(e) => {
                overall_pb.abandon();
                return Err(e);
            }
        };

    overall_pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.result.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for processed in &successful {
            if let Some(result) = &processed.result {
                let output_name = processed
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("claim");

                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_result(result, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results, started_at)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for processed in &failed {
            println!(
                "  - {}: {}",
                processed.path.display(),
                processed.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// A finished file, still holding its worker slot.
struct Finished {
    index: usize,
    path: PathBuf,
    outcome: anyhow::Result<ExtractionResult>,
    processing_time_ms: u64,
    _permit: OwnedSemaphorePermit,
}

/// Run `worker` over `files` on at most `jobs` blocking threads.
///
/// Results come back in input order. Unless `continue_on_error` is set, the
/// first failure stops scheduling and is returned. A worker slot is released
/// only after its result has been handled here, so no file is started once a
/// failure has been seen.
async fn process_files<F>(
    files: &[PathBuf],
    jobs: usize,
    continue_on_error: bool,
    worker: F,
    progress: &ProgressBar,
) -> anyhow::Result<Vec<ProcessResult>>
where
    F: Fn(&Path) -> anyhow::Result<ExtractionResult> + Send + Sync + 'static,
{
    let worker = Arc::new(worker);
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut tasks: JoinSet<Finished> = JoinSet::new();
    let mut queue = files.iter().cloned().enumerate().peekable();
    let mut slots: Vec<Option<ProcessResult>> = files.iter().map(|_| None).collect();

    loop {
        tokio::select! {
            biased;

            Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                let finished = joined?;
                let path = finished.path;

                let processed = match finished.outcome {
                    Ok(result) => ProcessResult {
                        path,
                        result: Some(result),
                        error: None,
                        processing_time_ms: finished.processing_time_ms,
                    },
                    Err(e) => {
                        let error_msg = e.to_string();
                        if !continue_on_error {
                            error!("Failed to process {}: {}", path.display(), error_msg);
                            tasks.abort_all();
                            return Err(e.context(format!("Processing failed for {}", path.display())));
                        }
                        warn!("Failed to process {}: {}", path.display(), error_msg);
                        ProcessResult {
                            path,
                            result: None,
                            error: Some(error_msg),
                            processing_time_ms: finished.processing_time_ms,
                        }
                    }
                };

                slots[finished.index] = Some(processed);
                progress.inc(1);
            }

            permit = semaphore.clone().acquire_owned(), if queue.peek().is_some() => {
                let permit = permit?;
                let Some((index, path)) = queue.next() else {
                    continue;
                };
                let worker = Arc::clone(&worker);
                tasks.spawn_blocking(move || {
                    let file_start = Instant::now();
                    let outcome = worker(&path);
                    Finished {
                        index,
                        path,
                        outcome,
                        processing_time_ms: file_start.elapsed().as_millis() as u64,
                        _permit: permit,
                    }
                });
            }

            else => break,
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Expand the glob, keeping files whose extension names a supported document.
fn collect_files(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = glob(pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && DocumentKind::from_path(p).is_ok())
        .collect();
    files.sort();
    Ok(files)
}

fn process_single_file(path: &Path, config: &ClaimScanConfig) -> anyhow::Result<ExtractionResult> {
    let reader = NativeDocumentReader::from_config(config);
    let output = reader.read_file(path)?;

    if output.text.trim().is_empty() {
        warn!("No text recognized in {}", path.display());
    }

    Ok(RuleBasedExtractor::new().extract(&output))
}

fn write_summary(
    path: &Path,
    results: &[ProcessResult],
    started_at: DateTime<Utc>,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    let processed_at = started_at.to_rfc3339();

    let mut header = vec!["filename", "status"];
    header.extend(CSV_HEADER);
    header.extend(["processing_time_ms", "processed_at", "error"]);
    wtr.write_record(&header)?;

    for processed in results {
        let filename = processed
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        let mut record = vec![filename];
        match &processed.result {
            Some(result) => {
                record.push("success".to_string());
                record.extend(csv_row(result));
            }
            None => {
                record.push("error".to_string());
                record.extend(std::iter::repeat_n(String::new(), CSV_HEADER.len()));
            }
        }
        record.push(processed.processing_time_ms.to_string());
        record.push(processed_at.clone());
        record.push(processed.error.clone().unwrap_or_default());

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
