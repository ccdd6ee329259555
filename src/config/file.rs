//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, FilterConfig, IngestConfig, ScoringConfig};
use crate::scoring::SelectionPolicy;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".deal-scorer.yaml",
    ".deal-scorer.yml",
    "deal-scorer.yaml",
    "deal-scorer.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/deal-scorer/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = find_git_root().as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("deal-scorer")) {
            return Some(path);
        }
    }

    dirs::home_dir().as_deref().and_then(find_config_in_dir)
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to `null`, which means "all defaults".
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Replace `target` with `value` when `value` differs from `default`.
fn override_f64(target: &mut f64, value: f64, default: f64) {
    if value.to_bits() != default.to_bits() {
        *target = value;
    }
}

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so an override
    /// config built from a handful of CLI flags leaves the rest alone.
    pub fn merge(&mut self, other: &Self) {
        let scoring = ScoringConfig::default();
        override_f64(
            &mut self.scoring.price_weight,
            other.scoring.price_weight,
            scoring.price_weight,
        );
        override_f64(
            &mut self.scoring.rating_weight,
            other.scoring.rating_weight,
            scoring.rating_weight,
        );
        if other.scoring.labels != scoring.labels {
            self.scoring.labels = other.scoring.labels;
        }

        override_f64(
            &mut self.selection.min_rating,
            other.selection.min_rating,
            SelectionPolicy::default().min_rating,
        );

        // Filtering config (booleans - if set to true, override)
        if other.filtering.relevance {
            self.filtering.relevance = true;
        }
        if other.filtering.drop_outliers {
            self.filtering.drop_outliers = true;
        }
        override_f64(
            &mut self.filtering.outlier_multiplier,
            other.filtering.outlier_multiplier,
            FilterConfig::default().outlier_multiplier,
        );
        if other.filtering.top_k.is_some() {
            self.filtering.top_k = other.filtering.top_k;
        }

        let ingest = IngestConfig::default();
        override_f64(
            &mut self.ingest.usd_to_inr,
            other.ingest.usd_to_inr,
            ingest.usd_to_inr,
        );
        override_f64(
            &mut self.ingest.default_rating,
            other.ingest.default_rating,
            ingest.default_rating,
        );

        // Output config - only override if explicitly set
        if other.output.format != crate::reports::ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.sort {
            self.output.sort = true;
        }
        if other.output.limit.is_some() {
            self.output.limit = other.output.limit;
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.fail_if_none {
            self.behavior.fail_if_none = true;
        }
        if other.behavior.explain {
            self.behavior.explain = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Deal Scorer Configuration
# Place this file at .deal-scorer.yaml in your project root or ~/.config/deal-scorer/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Deal Scorer Configuration File
# ==============================
#
# Place it at:
#   - .deal-scorer.yaml in your project root
#   - ~/.config/deal-scorer/deal-scorer.yaml for global config
#
# CLI arguments always override file settings.

# Scoring: final = price_weight * price_score + rating_weight * rating_score
scoring:
  # Weights are normalized to sum to 1.0
  price_weight: 0.7
  rating_weight: 0.3
  labels:
    # Score >= excellent: Excellent Deal
    excellent: 0.8
    # Score >= good: Good Value
    good: 0.6
    # Score >= fair: Fair, anything lower: Consider Waiting
    fair: 0.0

# Best-deal selection
selection:
  # Candidates must be rated strictly above this value
  min_rating: 3.5

# Pre-scoring filters
filtering:
  # Drop accessories and listings missing query words (needs --query)
  relevance: false
  # Drop listings priced outside the interquartile band
  drop_outliers: false
  outlier_multiplier: 1.5
  # Keep only the k most relevant listings (needs --query)
  # top_k: 10

# Listing normalization
ingest:
  # Rate for prices quoted in dollars
  usd_to_inr: 83.0
  # Rating used when a listing has none
  default_rating: 2.5

# Output configuration
output:
  # Format: auto, json, csv, summary, table
  format: auto
  # Output file path (omit for stdout)
  # file: deals.json
  no_color: false
  # Sort products best first
  sort: false
  # List at most this many products (omit for all)
  # limit: 10

# Behavior flags
behavior:
  quiet: false
  # Exit with code 1 when no best deal can be picked
  fail_if_none: false
  # Show the score breakdown in text output
  explain: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
