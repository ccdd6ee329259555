//! Product records and their scored counterparts.

use super::DealLabel;
use serde::{Deserialize, Serialize};

/// A single normalized product listing.
///
/// Produced once per search response by ingestion (or supplied directly by
/// the caller) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product title as shown by the retailer
    #[serde(alias = "product_name")]
    pub name: String,
    /// Price in the result set's currency; must be > 0 to be scored
    pub price: f64,
    /// Rating on a 0.0 - 5.0 scale
    pub rating: f64,
    /// Store the listing came from
    #[serde(default)]
    pub retailer: String,
    /// Link to the product page
    #[serde(default, alias = "product_url")]
    pub url: String,
    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Markdown text such as `"20% off (was ₹1,000)"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

impl ProductRecord {
    /// Create a record with no retailer or URL.
    pub fn new(name: impl Into<String>, price: f64, rating: f64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
            retailer: String::new(),
            url: String::new(),
            image_url: None,
            discount: None,
        }
    }

    /// Set the retailer.
    #[must_use]
    pub fn with_retailer(mut self, retailer: impl Into<String>) -> Self {
        self.retailer = retailer.into();
        self
    }

    /// Set the product URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the product image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Set the discount text.
    #[must_use]
    pub fn with_discount(mut self, discount: Option<String>) -> Self {
        self.discount = discount;
        self
    }

    /// Whether the price can take part in scoring.
    ///
    /// Rejects zero, negative, NaN and infinite prices.
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// A product with its score breakdown and recommendation label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: ProductRecord,
    /// Weighted price/rating score (0.0 - 1.0)
    pub final_score: f64,
    /// Normalized price component (1.0 = cheapest in the set)
    pub price_score: f64,
    /// Normalized rating component (rating / 5)
    pub rating_score: f64,
    /// Label derived from `final_score`
    pub recommendation: DealLabel,
}

impl ScoredProduct {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.product.price
    }

    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.product.rating
    }

    #[must_use]
    pub fn retailer(&self) -> &str {
        &self.product.retailer
    }

    #[must_use]
    pub fn discount(&self) -> Option<&str> {
        self.product.discount.as_deref()
    }

    /// One-line breakdown for debug logs and `--explain` output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{:.4} (price: {:.4}, rating: {:.4}) {}",
            self.final_score, self.price_score, self.rating_score, self.recommendation
        )
    }
}
