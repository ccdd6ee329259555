//! Config command handlers.
//!
//! Implements `config show|schema|init|discover|presets`. Handlers write
//! to a caller-supplied writer so they can be tested without a terminal.

use crate::config::{
    discover_config_file, generate_example_config, generate_full_example_config,
    generate_json_schema, AppConfig, ConfigPreset,
};
use crate::error::DealScorerError;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name written by `config init`.
pub const INIT_FILE_NAME: &str = ".deal-scorer.yaml";

/// Print the effective configuration as YAML.
pub fn run_config_show(
    config: &AppConfig,
    loaded_from: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    match loaded_from {
        Some(path) => writeln!(out, "# Loaded from: {}", path.display())?,
        None => writeln!(out, "# No config file found; showing defaults")?,
    }
    let yaml = serde_yaml::to_string(config).context("failed to serialize config")?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

/// Write the JSON schema for config files to `output` or `out`.
pub fn run_config_schema(output: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let schema = generate_json_schema()?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema).map_err(|e| DealScorerError::io(path, e))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => writeln!(out, "{schema}")?,
    }
    Ok(())
}

/// Create a config file in `dir`, returning its path.
pub fn run_config_init(dir: &Path, full: bool, force: bool) -> Result<PathBuf> {
    let target = dir.join(INIT_FILE_NAME);
    if target.exists() && !force {
        bail!(
            "{} already exists. Remove it first or pass --force to overwrite.",
            target.display()
        );
    }
    let content = if full {
        generate_full_example_config()
    } else {
        generate_example_config()
    };
    std::fs::write(&target, content).map_err(|e| DealScorerError::io(&target, e))?;
    Ok(target)
}

/// Describe where config files are looked up and which one is active.
pub fn run_config_discover(explicit: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let search_paths = [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|p| p.join("deal-scorer")),
        dirs::home_dir(),
    ];
    writeln!(out, "Config file search paths (in order):")?;
    if let Some(path) = explicit {
        writeln!(out, "  {} (--config)", path.display())?;
    }
    writeln!(out, "  <current directory and git root>")?;
    for path in search_paths.into_iter().flatten() {
        writeln!(out, "  {}", path.display())?;
    }
    writeln!(out)?;
    writeln!(out, "Recognized file names:")?;
    for name in [".deal-scorer.yaml", ".deal-scorer.yml", "deal-scorer.yaml", "deal-scorer.yml"] {
        writeln!(out, "  {name}")?;
    }
    writeln!(out)?;
    match discover_config_file(explicit) {
        Some(path) => writeln!(out, "Active config file: {}", path.display())?,
        None => writeln!(out, "No config file found.")?,
    }
    Ok(())
}

/// List the named presets.
pub fn run_config_presets(out: &mut dyn Write) -> Result<()> {
    let width = ConfigPreset::all()
        .iter()
        .map(|p| p.name().len())
        .max()
        .unwrap_or(0);
    for preset in ConfigPreset::all() {
        writeln!(out, "{:<width$}  {}", preset.name(), preset.description())?;
    }
    Ok(())
}
