//! Configuration types for deal-scorer.

use crate::filter::DEFAULT_OUTLIER_MULTIPLIER;
use crate::reports::ReportFormat;
use crate::scoring::{
    DealScorer, LabelThresholds, ScoringWeights, SelectionPolicy, DEFAULT_PRICE_WEIGHT,
    DEFAULT_RATING_WEIGHT,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// Config files provide the base layer; CLI flags are merged on top with
/// [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Score weights and label thresholds
    pub scoring: ScoringConfig,
    /// Best-deal selection policy
    pub selection: SelectionPolicy,
    /// Pre-scoring filters
    pub filtering: FilterConfig,
    /// Listing normalization
    pub ingest: IngestConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Build the scorer described by this config.
    #[must_use]
    pub fn scorer(&self) -> DealScorer {
        self.scoring.scorer()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the price and rating weights.
    pub const fn weights(mut self, price: f64, rating: f64) -> Self {
        self.config.scoring.price_weight = price;
        self.config.scoring.rating_weight = rating;
        self
    }

    /// Set the label thresholds.
    pub const fn labels(mut self, labels: LabelThresholds) -> Self {
        self.config.scoring.labels = labels;
        self
    }

    /// Set the minimum rating for best-deal candidates.
    pub const fn min_rating(mut self, min_rating: f64) -> Self {
        self.config.selection.min_rating = min_rating;
        self
    }

    /// Enable relevance filtering against the query.
    pub const fn relevance(mut self, enabled: bool) -> Self {
        self.config.filtering.relevance = enabled;
        self
    }

    /// Enable IQR outlier removal.
    pub const fn drop_outliers(mut self, enabled: bool) -> Self {
        self.config.filtering.drop_outliers = enabled;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Sort scored output best first.
    pub const fn sort(mut self, sort: bool) -> Self {
        self.config.output.sort = sort;
        self
    }

    /// Cap the number of products listed in reports.
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.output.limit = limit;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit non-zero when no best deal can be picked.
    pub const fn fail_if_none(mut self, fail: bool) -> Self {
        self.config.behavior.fail_if_none = fail;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Scoring Configuration
// ============================================================================

/// Score weights and recommendation label thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the normalized price (cheaper is better)
    pub price_weight: f64,
    /// Weight of the normalized rating
    pub rating_weight: f64,
    /// Score thresholds for labels
    pub labels: LabelThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            price_weight: DEFAULT_PRICE_WEIGHT,
            rating_weight: DEFAULT_RATING_WEIGHT,
            labels: LabelThresholds::default(),
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        ScoringWeights::new(self.price_weight, self.rating_weight)
    }

    #[must_use]
    pub fn scorer(&self) -> DealScorer {
        DealScorer::new()
            .with_weights(self.weights())
            .with_labels(self.labels)
    }
}

// ============================================================================
// Filter Configuration
// ============================================================================

/// Pre-scoring filters. All are off by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Drop accessories and listings missing query tokens (needs a query)
    pub relevance: bool,
    /// Drop listings priced outside the IQR band
    pub drop_outliers: bool,
    /// IQR multiplier for the outlier band
    pub outlier_multiplier: f64,
    /// Keep only the k most relevant listings before scoring (needs a query)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            relevance: false,
            drop_outliers: false,
            outlier_multiplier: DEFAULT_OUTLIER_MULTIPLIER,
            top_k: None,
        }
    }
}

// ============================================================================
// Ingest Configuration
// ============================================================================

/// Default USD to INR conversion rate for dollar-quoted prices.
pub const DEFAULT_USD_TO_INR: f64 = 83.0;

/// Rating assumed for listings without one (scores as 0.5).
pub const DEFAULT_MISSING_RATING: f64 = 2.5;

/// Listing normalization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IngestConfig {
    /// Conversion rate applied to prices quoted in dollars
    pub usd_to_inr: f64,
    /// Rating given to listings without one
    pub default_rating: f64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            usd_to_inr: DEFAULT_USD_TO_INR,
            default_rating: DEFAULT_MISSING_RATING,
        }
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Sort scored products best first
    pub sort: bool,
    /// List at most this many products (None for all)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

// ============================================================================
// Behavior Configuration
// ============================================================================

/// Behavior flags for CLI operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when no best deal can be picked
    pub fail_if_none: bool,
    /// Include the score breakdown in text output
    pub explain: bool,
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Configuration for the `score` and `best` commands.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Input document (`-` for stdin)
    pub input: PathBuf,
    /// Search query the listings answer, if known
    pub query: Option<String>,
    /// Effective application config
    pub app: AppConfig,
}

impl ScoreConfig {
    /// Whether input is read from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.scoring.price_weight, 0.7);
        assert_eq!(config.scoring.rating_weight, 0.3);
        assert_eq!(config.selection.min_rating, 3.5);
        assert_eq!(config.ingest.usd_to_inr, 83.0);
        assert!(!config.filtering.relevance);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .weights(0.5, 0.5)
            .min_rating(4.0)
            .drop_outliers(true)
            .output_format(ReportFormat::Json)
            .fail_if_none(true)
            .build();
        assert_eq!(config.scoring.price_weight, 0.5);
        assert_eq!(config.selection.min_rating, 4.0);
        assert!(config.filtering.drop_outliers);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.fail_if_none);
    }

    #[test]
    fn test_scorer_uses_config_weights() {
        let config = AppConfig::builder().weights(1.0, 0.0).build();
        let weights = config.scorer().weights();
        assert_eq!(weights.price, 1.0);
        assert_eq!(weights.rating, 0.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("scoring:\n  price_weight: 0.6\n").unwrap();
        assert_eq!(config.scoring.price_weight, 0.6);
        assert_eq!(config.scoring.rating_weight, 0.3);
        assert_eq!(config.scoring.labels.excellent, 0.8);
    }

    #[test]
    fn test_stdin_input() {
        let config = ScoreConfig {
            input: PathBuf::from("-"),
            query: None,
            app: AppConfig::default(),
        };
        assert!(config.reads_stdin());
    }
}
