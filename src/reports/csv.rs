//! CSV report generator.
//!
//! One row per scored product, suitable for spreadsheet import.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ScoredProduct, SearchSummary};
use std::fmt::Write as _;

const HEADER: &str =
    "name,retailer,price,rating,price_score,rating_score,final_score,recommendation,discount,url";

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        products: &[ScoredProduct],
        _summary: &SearchSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str(HEADER);
        content.push('\n');

        for p in products.iter().take(config.item_limit(products.len())) {
            writeln!(
                content,
                "{},{},{:.2},{:.1},{:.4},{:.4},{:.4},{},{},{}",
                escape_csv(p.name()),
                escape_csv(p.retailer()),
                p.price(),
                p.rating(),
                p.price_score,
                p.rating_score,
                p.final_score,
                escape_csv(p.recommendation.as_str()),
                escape_csv(p.discount().unwrap_or_default()),
                escape_csv(&p.product.url),
            )?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
///
/// Embedded quotes are doubled.
#[must_use]
pub fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
