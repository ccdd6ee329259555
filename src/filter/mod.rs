//! Optional pre-scoring filters.
//!
//! Scores are relative to the result set, so a single accessory at a
//! tenth of the price (or a wildly overpriced import) drags every other
//! product's price score. These filters trim such listings before
//! scoring. Both fall back to their input rather than returning nothing.

mod outliers;
mod relevance;

pub use outliers::{filter_price_outliers, price_band, PriceBand, DEFAULT_OUTLIER_MULTIPLIER};
pub use relevance::{
    filter_relevant, is_relevant_product, most_relevant, relevance_score, top_k_relevant,
    ACCESSORY_KEYWORDS,
};
