//! Pipeline orchestration for deal scoring.
//!
//! Shared parse → filter → score → report workflow used by the CLI
//! command handlers.

mod output;
mod parse;
mod report_stage;
mod score_stage;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{parse_listings_with_context, read_input, ParsedListings};
pub use report_stage::{output_best_deal, output_report};
pub use score_stage::{apply_filters, score_products, ScoringOutcome};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a listing document
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// No best deal could be picked (with --fail-if-none)
    pub const NO_BEST_DEAL: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
