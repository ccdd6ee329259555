//! Configuration validation for deal-scorer.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, FilterConfig, IngestConfig, OutputConfig, ScoreConfig, ScoringConfig};
use crate::error::{DealScorerError, Result};
use crate::scoring::{SelectionPolicy, MAX_RATING};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Fail with every problem listed, one per line.
    fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let details = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n  ");
        Err(DealScorerError::Validation(format!(
            "{} configuration problem(s)\n  {details}",
            errors.len()
        )))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.selection.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.ingest.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, weight) in [
            ("scoring.price_weight", self.price_weight),
            ("scoring.rating_weight", self.rating_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                errors.push(ConfigError::new(
                    field,
                    format!("Weight must be a non-negative number, got {weight}"),
                ));
            }
        }
        if self.price_weight == 0.0 && self.rating_weight == 0.0 {
            errors.push(ConfigError::new(
                "scoring",
                "At least one of price_weight and rating_weight must be positive",
            ));
        }

        let labels = &self.labels;
        for (field, value) in [
            ("scoring.labels.excellent", labels.excellent),
            ("scoring.labels.good", labels.good),
            ("scoring.labels.fair", labels.fair),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ConfigError::new(
                    field,
                    format!("Threshold must be between 0.0 and 1.0, got {value}"),
                ));
            }
        }
        if !(labels.fair <= labels.good && labels.good <= labels.excellent) {
            errors.push(ConfigError::new(
                "scoring.labels",
                format!(
                    "Thresholds must satisfy fair <= good <= excellent, got {} / {} / {}",
                    labels.fair, labels.good, labels.excellent
                ),
            ));
        }

        errors
    }
}

impl Validatable for SelectionPolicy {
    fn validate(&self) -> Vec<ConfigError> {
        if (0.0..=MAX_RATING).contains(&self.min_rating) {
            Vec::new()
        } else {
            vec![ConfigError::new(
                "selection.min_rating",
                format!(
                    "Minimum rating must be between 0 and {MAX_RATING}, got {}",
                    self.min_rating
                ),
            )]
        }
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(self.outlier_multiplier.is_finite() && self.outlier_multiplier > 0.0) {
            errors.push(ConfigError::new(
                "filtering.outlier_multiplier",
                format!(
                    "Outlier multiplier must be positive, got {}",
                    self.outlier_multiplier
                ),
            ));
        }
        if self.top_k == Some(0) {
            errors.push(ConfigError::new(
                "filtering.top_k",
                "top_k must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for IngestConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(self.usd_to_inr.is_finite() && self.usd_to_inr > 0.0) {
            errors.push(ConfigError::new(
                "ingest.usd_to_inr",
                format!("Conversion rate must be positive, got {}", self.usd_to_inr),
            ));
        }
        if !(0.0..=MAX_RATING).contains(&self.default_rating) {
            errors.push(ConfigError::new(
                "ingest.default_rating",
                format!(
                    "Default rating must be between 0 and {MAX_RATING}, got {}",
                    self.default_rating
                ),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.limit == Some(0) {
            errors.push(ConfigError::new("output.limit", "limit must be at least 1"));
        }
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for ScoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.reads_stdin() && !self.input.exists() {
            errors.push(ConfigError::new(
                "input",
                format!("File not found: {}", self.input.display()),
            ));
        }

        let filtering = &self.app.filtering;
        if self.query.is_none() && (filtering.relevance || filtering.top_k.is_some()) {
            tracing::warn!("Relevance filtering needs --query; it will be skipped");
        }

        errors.extend(self.app.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::LabelThresholds;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
        assert!(AppConfig::strict_preset().is_valid());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = AppConfig::builder().weights(-0.5, 1.0).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.price_weight");
    }

    #[test]
    fn test_zero_weights_rejected() {
        let config = AppConfig::builder().weights(0.0, 0.0).build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_ensure_valid_lists_fields() {
        assert!(AppConfig::default().ensure_valid().is_ok());

        let config = AppConfig::builder().weights(-1.0, 1.0).min_rating(9.0).build();
        let message = config.ensure_valid().unwrap_err().to_string();
        assert!(message.starts_with("Validation failed: 2 configuration problem(s)"));
        assert!(message.contains("scoring.price_weight"));
        assert!(message.contains("selection.min_rating"));
    }

    #[test]
    fn test_misordered_thresholds_rejected() {
        let labels = LabelThresholds {
            excellent: 0.5,
            good: 0.6,
            fair: 0.0,
        };
        let config = AppConfig::builder().labels(labels).build();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "scoring.labels"));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let labels = LabelThresholds {
            excellent: 1.5,
            ..LabelThresholds::default()
        };
        assert!(!AppConfig::builder().labels(labels).build().is_valid());
    }

    #[test]
    fn test_min_rating_range() {
        assert!(SelectionPolicy { min_rating: 0.0 }.is_valid());
        assert!(!SelectionPolicy { min_rating: 5.5 }.is_valid());
    }

    #[test]
    fn test_filter_and_ingest_validation() {
        let filter = FilterConfig {
            outlier_multiplier: 0.0,
            top_k: Some(0),
            ..FilterConfig::default()
        };
        assert_eq!(filter.validate().len(), 2);

        let ingest = IngestConfig {
            usd_to_inr: -1.0,
            default_rating: 7.0,
        };
        assert_eq!(ingest.validate().len(), 2);
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let output = OutputConfig {
            file: Some(PathBuf::from("/definitely/not/here/out.json")),
            ..OutputConfig::default()
        };
        assert!(!output.is_valid());
    }

    #[test]
    fn test_output_limit_must_be_positive() {
        let output = OutputConfig {
            limit: Some(0),
            ..OutputConfig::default()
        };
        assert_eq!(output.validate()[0].field, "output.limit");
        assert!(OutputConfig {
            limit: Some(1),
            ..OutputConfig::default()
        }
        .is_valid());
    }

    #[test]
    fn test_score_config_missing_input() {
        let config = ScoreConfig {
            input: PathBuf::from("/nonexistent/listings.json"),
            query: None,
            app: AppConfig::default(),
        };
        let errors = config.validate();
        assert_eq!(errors[0].field, "input");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::new("test_field", "test error message");
        assert_eq!(error.to_string(), "test_field: test error message");
    }
}
