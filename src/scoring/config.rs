//! Tunable constants for deal scoring and best-deal selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default weight of the normalized price component.
pub const DEFAULT_PRICE_WEIGHT: f64 = 0.7;

/// Default weight of the normalized rating component.
pub const DEFAULT_RATING_WEIGHT: f64 = 0.3;

/// Ratings are on a 0 - `MAX_RATING` scale.
pub const MAX_RATING: f64 = 5.0;

/// Default minimum rating (exclusive) for best-deal candidates.
pub const DEFAULT_MIN_RATING: f64 = 3.5;

/// Weights for the price/rating combination.
///
/// Weights are normalized to sum to 1.0 before use, so `{7, 3}` behaves
/// like `{0.7, 0.3}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight for price (cheaper scores higher)
    pub price: f64,
    /// Weight for rating
    pub rating: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE_WEIGHT,
            rating: DEFAULT_RATING_WEIGHT,
        }
    }
}

impl ScoringWeights {
    #[must_use]
    pub const fn new(price: f64, rating: f64) -> Self {
        Self { price, rating }
    }

    /// Weights scaled to sum to 1.0.
    ///
    /// Falls back to the defaults when the weights are unusable
    /// (negative, non-finite, or summing to zero).
    #[must_use]
    pub fn normalized(&self) -> Self {
        let usable = self.price.is_finite()
            && self.rating.is_finite()
            && self.price >= 0.0
            && self.rating >= 0.0;
        let total = self.price + self.rating;
        if !usable || total <= 0.0 {
            return Self::default();
        }
        Self {
            price: self.price / total,
            rating: self.rating / total,
        }
    }
}

/// Score thresholds for recommendation labels.
///
/// A score `>= excellent` is an excellent deal, `>= good` is good value,
/// `>= fair` is fair, anything lower is "consider waiting". With the
/// default `fair` of 0.0 every score is at least fair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LabelThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.8,
            good: 0.6,
            fair: 0.0,
        }
    }
}

impl LabelThresholds {
    /// Four-tier ladder: excellent / good / fair (>= 0.4) / consider waiting.
    #[must_use]
    pub const fn four_tier() -> Self {
        Self {
            excellent: 0.8,
            good: 0.6,
            fair: 0.4,
        }
    }
}

/// Policy for choosing the single best deal from a scored set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SelectionPolicy {
    /// Candidates must have a rating strictly above this value; when none
    /// does, the whole set is considered
    pub min_rating: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}
