//! **Rank shopping search results by price and rating.**
//!
//! `deal-scorer` takes the product listings returned for a shopping search,
//! scores every listing with a weighted blend of its normalized price (cheaper
//! is better) and its rating, labels each one, and picks the single best deal.
//! Scores are relative to the result set they were computed in.
//!
//! ## Core Concepts & Modules
//!
//! - **[`scoring`]**: [`DealScorer`], [`score_and_rank`] and [`select_best_deal`].
//!   Pure functions over [`ProductRecord`]s; invalid prices are dropped, never
//!   an error.
//! - **[`ingest`]**: turns raw listings (display-text prices like `"₹1,23,999"`,
//!   ratings like `"4.3 out of 5"`, missing store names) into records.
//! - **[`filter`]**: optional relevance and price-outlier filters applied
//!   before scoring.
//! - **[`summary`]**: per-retailer grouping, price statistics and the
//!   recommendation text.
//! - **[`reports`]**: JSON, CSV, summary and table output.
//! - **[`pipeline`]**: parse → filter → score → report orchestration used by the CLI.
//! - **[`config`]**: YAML config files, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use deal_scorer::{score_and_rank, select_best_deal, ProductRecord, SelectionPolicy};
//!
//! let products = vec![
//!     ProductRecord::new("Phone A", 100.0, 4.0),
//!     ProductRecord::new("Phone B", 50.0, 3.0),
//!     ProductRecord::new("Phone C", 75.0, 4.5),
//! ];
//!
//! let scored = score_and_rank(&products);
//! let scores: Vec<f64> = scored.iter().map(|p| p.final_score).collect();
//! assert_eq!(scores, vec![0.24, 0.88, 0.62]);
//!
//! // Phone B scores highest but its 3.0 rating is below the 3.5 bar.
//! let best = select_best_deal(&scored, &SelectionPolicy::default()).unwrap();
//! assert_eq!(best.name(), "Phone C");
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `deal-scorer` binary wraps the [`pipeline`]: `deal-scorer score results.json`
//! or `deal-scorer best - < results.json`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize -> f64 casts for counts and averages
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod summary;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, ScoreConfig};
pub use config::{BehaviorConfig, FilterConfig, IngestConfig, OutputConfig, ScoringConfig};
pub use config::{ConfigError, Validatable};
pub use error::{DealScorerError, ErrorContext, Result};
pub use filter::{filter_price_outliers, filter_relevant, is_relevant_product, most_relevant};
pub use ingest::{normalize_listings, parse_listings_str, parse_price_text, RawListing};
pub use model::{DealLabel, PriceStats, ProductRecord, ScoredProduct, SearchSummary};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    rank_by_score, score_and_rank, select_best_deal, DealScorer, LabelThresholds, ScoringWeights,
    SelectionPolicy,
};
pub use summary::summarize;
