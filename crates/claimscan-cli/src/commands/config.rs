//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use claimscan_core::ClaimScanConfig;

use super::config_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "ocr.language")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_file: Option<&str>) -> anyhow::Result<()> {
    let path = config_path(config_file);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(init_args, &path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => show_path(&path),
    }
}

fn read_or_default(path: &Path) -> anyhow::Result<ClaimScanConfig> {
    if path.exists() {
        Ok(ClaimScanConfig::from_file(path)?)
    } else {
        Ok(ClaimScanConfig::default())
    }
}

fn show_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = read_or_default(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, default_path: &Path) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| default_path.to_path_buf());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    ClaimScanConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(read_or_default(path)?)?;
    let value = lookup(&json, key)?;

    match value {
        Value::String(s) => println!("{}", s),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }

    Ok(())
}

fn set_config(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let config = read_or_default(path)?;

    // Bare words such as eng+chi_tra are taken as strings
    let parsed_value: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let mut json = serde_json::to_value(&config)?;
    assign(&mut json, key, parsed_value.clone())?;

    let config: ClaimScanConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );

    Ok(())
}

fn show_path(path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'claimscan config init' to create a configuration file.");
    }

    Ok(())
}

/// Navigate a dotted key path.
fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

/// Replace the value at an existing dotted key path.
fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let mut current = json;
    for part in key.split('.') {
        current = current
            .get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    if current.is_object() {
        anyhow::bail!("Cannot replace configuration section {}", key);
    }
    *current = value;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimscan_core::OcrLanguage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_key() {
        let json = serde_json::to_value(ClaimScanConfig::default()).unwrap();
        assert_eq!(lookup(&json, "ocr.language").unwrap(), &json!("eng"));
        assert_eq!(lookup(&json, "pdf.render_dpi").unwrap(), &json!(200));
        assert!(lookup(&json, "ocr.missing").is_err());
    }

    #[test]
    fn test_assign_round_trips_through_config() {
        let mut json = serde_json::to_value(ClaimScanConfig::default()).unwrap();
        assign(&mut json, "ocr.language", json!("eng+chi_tra")).unwrap();
        assign(&mut json, "pdf.render_dpi", json!(300)).unwrap();

        let config: ClaimScanConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.ocr.language, OcrLanguage::Multilingual);
        assert_eq!(config.pdf.render_dpi, 300);
    }

    #[test]
    fn test_assign_rejects_unknown_key_and_sections() {
        let mut json = serde_json::to_value(ClaimScanConfig::default()).unwrap();
        assert!(assign(&mut json, "ocr.threshold", json!(1)).is_err());
        assert!(assign(&mut json, "pdf", json!(1)).is_err());
    }

    #[test]
    fn test_set_and_get_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        set_config(&path, "ocr.tesseract_path", "/usr/local/bin/tesseract").unwrap();

        let config = ClaimScanConfig::from_file(&path).unwrap();
        assert_eq!(
            config.ocr.tesseract_path,
            PathBuf::from("/usr/local/bin/tesseract")
        );
        assert_eq!(config.pdf, ClaimScanConfig::default().pdf);
    }

    #[test]
    fn test_set_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = set_config(&path, "ocr.engine_mode", "9").unwrap_err();
        assert!(err.to_string().contains("ocr.engine_mode"));
        assert!(set_config(&path, "pdf.render_dpi", "0").is_err());
        assert!(!path.exists());

        set_config(&path, "ocr.engine_mode", "1").unwrap();
        assert_eq!(ClaimScanConfig::from_file(&path).unwrap().ocr.engine_mode, 1);
    }

    #[test]
    fn test_set_rejects_invalid_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(set_config(&path, "ocr.language", "klingon").is_err());
        assert!(!path.exists());
    }
}
