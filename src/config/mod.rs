//! Configuration module for deal-scorer.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common shopping styles
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use deal_scorer::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Budget);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .weights(0.6, 0.4)
//!     .min_rating(4.0)
//!     .fail_if_none(true)
//!     .build();
//!
//! // Load from file
//! use deal_scorer::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.deal-scorer.yaml` file in your project root or `~/.config/deal-scorer/`:
//!
//! ```yaml
//! scoring:
//!   price_weight: 0.6
//!   rating_weight: 0.4
//! selection:
//!   min_rating: 4.0
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, FilterConfig, IngestConfig, OutputConfig,
    ScoreConfig, ScoringConfig, DEFAULT_MISSING_RATING, DEFAULT_USD_TO_INR,
};
pub use validation::{ConfigError, Validatable};

use crate::error::{DealScorerError, ReportErrorKind, Result};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.deal-scorer.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).map_err(|e| {
        DealScorerError::report("config schema", ReportErrorKind::JsonSerialization(e.to_string()))
    })
}
