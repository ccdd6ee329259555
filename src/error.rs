//! Unified error types for deal-scorer.
//!
//! Scoring itself never fails; these errors cover reading listing
//! documents, rendering reports, and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deal-scorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DealScorerError {
    /// Errors while reading or normalizing a listing document
    #[error("Failed to read listings: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Unrecognized document shape")]
    UnknownShape,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(String),
}

/// Convenient Result type for deal-scorer operations
pub type Result<T> = std::result::Result<T, DealScorerError>;

impl DealScorerError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an input error for a document that is neither an array nor
    /// an object carrying one of the `expected` keys
    pub fn unknown_shape(origin: impl Into<String>, expected: &[&str]) -> Self {
        Self::input(
            format!(
                "{} is not a JSON array or an object with one of: {}",
                origin.into(),
                expected.join(", ")
            ),
            InputErrorKind::UnknownShape,
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for DealScorerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DealScorerError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the existing context, so a failure
/// deep in ingestion reads like `reading listings.json: JSON deserialization`.
///
/// # Example
///
/// ```ignore
/// use deal_scorer::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<Vec<RawListing>> {
///     let content = std::fs::read_to_string(path).context("reading listings")?;
///     parse_listings_str(&content)
///         .with_context(|| format!("parsing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DealScorerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: DealScorerError, new_ctx: &str) -> DealScorerError {
    match err {
        DealScorerError::Input {
            context: existing,
            source,
        } => DealScorerError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DealScorerError::Report {
            context: existing,
            source,
        } => DealScorerError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DealScorerError::Io {
            path,
            message,
            source,
        } => DealScorerError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DealScorerError::Config(msg) => DealScorerError::Config(chain_context(new_ctx, &msg)),
        DealScorerError::Validation(msg) => {
            DealScorerError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
