//! Process command - OCR a single claim document and extract its fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use claimscan_core::{
    ClaimExtractor, ClaimScanConfig, DocumentKind, ExtractionResult, NativeDocumentReader,
    OcrOutput, RuleBasedExtractor,
};

use super::output::{format_occurrences, format_result, OutputFormat};
use super::{load_config, OcrArgs};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    #[command(flatten)]
    ocr: OcrArgs,

    /// Save the raw OCR text to this file
    #[arg(long)]
    text_output: Option<PathBuf>,

    /// Save the grayscale image fed to OCR to this file
    #[arg(long)]
    image_output: Option<PathBuf>,

    /// Print the raw OCR text
    #[arg(long)]
    show_text: bool,

    /// List every labeled field occurrence on stderr
    #[arg(long)]
    trace: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = args.ocr.apply(load_config(config_path)?);
    config.validate()?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let kind = DocumentKind::from_path(&args.input)?;

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let (output, result) = match process_document(&args, kind, &config, &pb) {
        Ok(processed) => processed,
        Err(e) => {
            pb.abandon_with_message("Failed");
            return Err(e);
        }
    };

    pb.finish_with_message("Done");

    if output.text.trim().is_empty() {
        warn!("No text recognized in {}", args.input.display());
    }

    if let Some(path) = &args.text_output {
        fs::write(path, &output.text)?;
        eprintln!("{} OCR text written to {}", style("✓").green(), path.display());
    }

    if let Some(path) = &args.image_output {
        output.image.save(path)?;
        eprintln!("{} Processed image written to {}", style("✓").green(), path.display());
    }

    if args.show_text {
        eprintln!("{}", style("Recognized text:").bold());
        eprintln!("{}", output.text);
        eprintln!();
    }

    if args.trace {
        eprint!("{}", format_occurrences(&RuleBasedExtractor::new().occurrences(&output.text)));
    }

    let formatted = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &formatted)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", formatted);
    }

    debug!(
        "OCR took {}ms, total processing time: {:?}",
        output.processing_time_ms,
        start.elapsed()
    );

    Ok(())
}

fn process_document(
    args: &ProcessArgs,
    kind: DocumentKind,
    config: &ClaimScanConfig,
    pb: &ProgressBar,
) -> anyhow::Result<(OcrOutput, ExtractionResult)> {
    pb.set_message("Loading document...");
    pb.set_position(10);

    let data = fs::read(&args.input)?;

    pb.set_message(match kind {
        DocumentKind::Pdf => "Rendering first page and running OCR...",
        DocumentKind::Image => "Running OCR...",
    });
    pb.set_position(30);

    let reader = NativeDocumentReader::from_config(config);
    let output = reader.read(&data, kind)?;

    pb.set_message("Extracting claim fields...");
    pb.set_position(80);

    let result = RuleBasedExtractor::new().extract(&output);

    pb.set_position(100);

    Ok((output, result))
}
