//! Aggregated views over a scored result set.

use super::ScoredProduct;
use serde::{Deserialize, Serialize};

/// Low / average / high over the positive prices of a set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub low: f64,
    /// Rounded to two decimals
    pub avg: f64,
    pub high: f64,
}

impl PriceStats {
    /// Compute stats over the positive, finite prices in `prices`.
    ///
    /// Returns `None` when no such price exists.
    pub fn from_prices(prices: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;

        for price in prices {
            if !(price.is_finite() && price > 0.0) {
                continue;
            }
            count += 1;
            sum += price;
            low = low.min(price);
            high = high.max(price);
        }

        if count == 0 {
            return None;
        }

        let avg = (sum / count as f64 * 100.0).round() / 100.0;
        Some(Self { low, avg, high })
    }

    /// Stats over a slice of scored products.
    #[must_use]
    pub fn of(products: &[ScoredProduct]) -> Option<Self> {
        Self::from_prices(products.iter().map(ScoredProduct::price))
    }
}

/// The scored products of one retailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformProducts {
    pub platform: String,
    /// Sorted by final score, best first
    pub products: Vec<ScoredProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PriceStats>,
}

/// Everything the presentation layer needs for one search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    /// The search query, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Retailers sorted by their lowest price
    pub platforms: Vec<PlatformProducts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PriceStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_deal: Option<ScoredProduct>,
    pub ai_recommendation: String,
    pub product_count: usize,
}

impl SearchSummary {
    /// Number of distinct retailers.
    #[must_use]
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Iterate all products across platforms.
    pub fn products(&self) -> impl Iterator<Item = &ScoredProduct> {
        self.platforms.iter().flat_map(|p| p.products.iter())
    }
}
