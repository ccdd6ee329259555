//! Where reports go and what they look like there.
//!
//! `auto` resolves per destination: people at a terminal get the summary,
//! pipes and files get JSON.

use crate::config::OutputConfig;
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Report destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` means stdout.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Destination named by the output section of the config.
    #[must_use]
    pub fn for_config(output: &OutputConfig) -> Self {
        Self::from_option(output.file.clone())
    }

    /// True only for stdout attached to a TTY.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        *self == Self::Stdout && std::io::stdout().is_terminal()
    }
}

/// Resolve `auto` for a destination; explicit formats pass through.
#[must_use]
pub fn auto_detect_format(format: ReportFormat, target: &OutputTarget) -> ReportFormat {
    if format != ReportFormat::Auto {
        return format;
    }
    if target.is_terminal() {
        ReportFormat::Summary
    } else {
        ReportFormat::Json
    }
}

/// Colors are off when `--no-color` is given or `NO_COLOR` is set.
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

/// Write a rendered report, making sure it ends with a newline.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    let newline = if content.ends_with('\n') { "" } else { "\n" };

    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{content}{newline}")
                .and_then(|()| stdout.flush())
                .context("Failed to write report to stdout")
        }
        OutputTarget::File(path) => {
            std::fs::write(path, format!("{content}{newline}"))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_target_from_config() {
        assert_eq!(
            OutputTarget::for_config(&OutputConfig::default()),
            OutputTarget::Stdout
        );

        let output = OutputConfig {
            file: Some(PathBuf::from("deals.csv")),
            ..OutputConfig::default()
        };
        assert_eq!(
            OutputTarget::for_config(&output),
            OutputTarget::File(PathBuf::from("deals.csv"))
        );
    }

    #[test]
    fn test_explicit_formats_are_kept() {
        for format in [ReportFormat::Csv, ReportFormat::Table, ReportFormat::Summary] {
            assert_eq!(auto_detect_format(format, &OutputTarget::Stdout), format);
        }
    }

    #[test]
    fn test_auto_is_json_for_files() {
        let target = OutputTarget::File(PathBuf::from("deals.json"));
        assert!(!target.is_terminal());
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &target),
            ReportFormat::Json
        );
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_file_output_gets_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let target = OutputTarget::File(path.clone());

        write_output("{}", &target, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");

        write_output("line\n", &target, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
