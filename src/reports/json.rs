//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{PriceStats, ScoredProduct, SearchSummary};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        products: &[ScoredProduct],
        summary: &SearchSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let limit = config.item_limit(products.len());
        let report = JsonDealReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: Utc::now().to_rfc3339(),
                input: config.metadata.input_path.as_deref(),
            },
            query: summary.query.as_deref(),
            product_count: summary.product_count,
            platform_count: summary.platform_count(),
            stats: summary.stats,
            best_deal: summary.best_deal.as_ref(),
            ai_recommendation: &summary.ai_recommendation,
            products: &products[..limit],
            platforms: summary
                .platforms
                .iter()
                .map(|p| PlatformInfo {
                    platform: &p.platform,
                    product_count: p.products.len(),
                    stats: p.stats,
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonDealReport<'a> {
    metadata: JsonReportMetadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    product_count: usize,
    platform_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<PriceStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_deal: Option<&'a ScoredProduct>,
    ai_recommendation: &'a str,
    products: &'a [ScoredProduct],
    platforms: Vec<PlatformInfo<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct PlatformInfo<'a> {
    platform: &'a str,
    product_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<PriceStats>,
}
