//! Extract command - run field extraction over already recognized text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use claimscan_core::{extract_claim_info, RuleBasedExtractor};

use super::output::{format_occurrences, format_result, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file to read (stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List every labeled field occurrence on stderr
    #[arg(long)]
    trace: bool,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let text = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Reading text from {}", path.display());
            fs::read_to_string(path)?
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if args.trace {
        eprint!("{}", format_occurrences(&RuleBasedExtractor::new().occurrences(&text)));
    }

    let result = extract_claim_info(&text);
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

    Ok(())
}
