//! Weighted price/rating scorer.
//!
//! For a result set with prices in `[min, max]`:
//!
//! ```text
//! price_score  = 1 - (price - min) / (max - min)     (1.0 when min == max)
//! rating_score = rating / 5
//! final_score  = w_price * price_score + w_rating * rating_score
//! ```
//!
//! Final scores are rounded to four decimals before labelling.

use super::config::{LabelThresholds, ScoringWeights, MAX_RATING};
use crate::model::{DealLabel, ProductRecord, ScoredProduct};
use std::cmp::Ordering;

/// Scores a result set of products against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DealScorer {
    weights: ScoringWeights,
    labels: LabelThresholds,
}

impl DealScorer {
    /// Scorer with the default 70/30 weights and three-tier labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom weights (normalized to sum to 1.0).
    #[must_use]
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights.normalized();
        self
    }

    /// Use custom label thresholds.
    #[must_use]
    pub const fn with_labels(mut self, labels: LabelThresholds) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    #[must_use]
    pub const fn labels(&self) -> LabelThresholds {
        self.labels
    }

    /// Score every product with a valid price.
    ///
    /// Products with a non-positive or non-finite price are dropped.
    /// The output keeps input order; use [`rank_by_score`] to sort.
    #[must_use]
    pub fn score_and_rank(&self, products: &[ProductRecord]) -> Vec<ScoredProduct> {
        let valid: Vec<&ProductRecord> = products
            .iter()
            .filter(|p| {
                let ok = p.has_valid_price();
                if !ok {
                    tracing::debug!("Dropping '{}': invalid price {}", p.name, p.price);
                }
                ok
            })
            .collect();

        let Some((min_price, max_price)) = price_range(&valid) else {
            return Vec::new();
        };

        valid
            .into_iter()
            .map(|product| {
                let price_score = normalized_price(product.price, min_price, max_price);
                let rating_score = normalized_rating(product.rating);
                let raw = self
                    .weights
                    .price
                    .mul_add(price_score, self.weights.rating * rating_score);
                let final_score = round4(raw.clamp(0.0, 1.0));
                let scored = ScoredProduct {
                    product: product.clone(),
                    final_score,
                    price_score,
                    rating_score,
                    recommendation: self.label_for(final_score),
                };
                tracing::debug!("Scored '{}': {}", scored.name(), scored.summary());
                scored
            })
            .collect()
    }

    /// Map a final score to its label.
    #[must_use]
    pub fn label_for(&self, score: f64) -> DealLabel {
        if score >= self.labels.excellent {
            DealLabel::ExcellentDeal
        } else if score >= self.labels.good {
            DealLabel::GoodValue
        } else if score >= self.labels.fair {
            DealLabel::Fair
        } else {
            DealLabel::ConsiderWaiting
        }
    }
}

/// Sort scored products best first: score descending, then price ascending.
///
/// The sort is stable, so fully tied products keep their input order.
pub fn rank_by_score(scored: &mut [ScoredProduct]) {
    scored.sort_by(compare_deals);
}

/// Ordering where the better deal compares `Less`.
pub(crate) fn compare_deals(a: &ScoredProduct, b: &ScoredProduct) -> Ordering {
    b.final_score
        .total_cmp(&a.final_score)
        .then_with(|| a.price().total_cmp(&b.price()))
}

fn price_range(products: &[&ProductRecord]) -> Option<(f64, f64)> {
    if products.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in products {
        min = min.min(p.price);
        max = max.max(p.price);
    }
    Some((min, max))
}

fn normalized_price(price: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        1.0
    } else {
        (1.0 - (price - min) / range).clamp(0.0, 1.0)
    }
}

/// Out-of-range ratings are clamped; non-finite ratings count as 0.
fn normalized_rating(rating: f64) -> f64 {
    if rating.is_finite() {
        rating.clamp(0.0, MAX_RATING) / MAX_RATING
    } else {
        0.0
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, rating: f64) -> ProductRecord {
        ProductRecord::new(format!("item-{price}-{rating}"), price, rating)
    }

    #[test]
    fn test_worked_example() {
        let products = vec![record(100.0, 4.0), record(50.0, 3.0), record(75.0, 4.5)];
        let scored = DealScorer::new().score_and_rank(&products);

        let prices: Vec<f64> = scored.iter().map(|s| s.price_score).collect();
        assert_eq!(prices, vec![0.0, 1.0, 0.5]);

        let finals: Vec<f64> = scored.iter().map(|s| s.final_score).collect();
        assert_eq!(finals, vec![0.24, 0.88, 0.62]);

        assert_eq!(scored[0].recommendation, DealLabel::Fair);
        assert_eq!(scored[1].recommendation, DealLabel::ExcellentDeal);
        assert_eq!(scored[2].recommendation, DealLabel::GoodValue);
    }

    #[test]
    fn test_equal_prices_score_full_price_component() {
        let products = vec![record(40.0, 1.0), record(40.0, 5.0), record(40.0, 3.0)];
        let scored = DealScorer::new().score_and_rank(&products);
        assert!(scored.iter().all(|s| s.price_score == 1.0));
        assert_eq!(scored[1].final_score, 1.0);
    }

    #[test]
    fn test_invalid_prices_are_dropped() {
        let products = vec![
            record(0.0, 5.0),
            record(-10.0, 5.0),
            record(f64::NAN, 5.0),
            record(20.0, 4.0),
        ];
        let scored = DealScorer::new().score_and_rank(&products);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].price(), 20.0);
    }

    #[test]
    fn test_invalid_prices_do_not_affect_range() {
        // The zero-price record must not become the minimum.
        let products = vec![record(0.0, 4.0), record(50.0, 4.0), record(100.0, 4.0)];
        let scored = DealScorer::new().score_and_rank(&products);
        assert_eq!(scored[0].price_score, 1.0);
        assert_eq!(scored[1].price_score, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(DealScorer::new().score_and_rank(&[]).is_empty());
        assert!(DealScorer::new()
            .score_and_rank(&[record(0.0, 3.0)])
            .is_empty());
    }

    #[test]
    fn test_out_of_range_rating_is_clamped() {
        let scored = DealScorer::new().score_and_rank(&[record(10.0, 9.0), record(20.0, -1.0)]);
        assert_eq!(scored[0].rating_score, 1.0);
        assert_eq!(scored[0].final_score, 1.0);
        assert_eq!(scored[1].rating_score, 0.0);
        assert_eq!(scored[1].final_score, 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = DealScorer::new().with_weights(ScoringWeights::new(0.5, 0.5));
        let scored = scorer.score_and_rank(&[record(100.0, 5.0), record(50.0, 0.0)]);
        assert_eq!(scored[0].final_score, 0.5);
        assert_eq!(scored[1].final_score, 0.5);
    }

    #[test]
    fn test_four_tier_labels() {
        let scorer = DealScorer::new().with_labels(LabelThresholds::four_tier());
        assert_eq!(scorer.label_for(0.85), DealLabel::ExcellentDeal);
        assert_eq!(scorer.label_for(0.6), DealLabel::GoodValue);
        assert_eq!(scorer.label_for(0.45), DealLabel::Fair);
        assert_eq!(scorer.label_for(0.1), DealLabel::ConsiderWaiting);
    }

    #[test]
    fn test_default_labels_never_consider_waiting() {
        let scorer = DealScorer::new();
        assert_eq!(scorer.label_for(0.0), DealLabel::Fair);
    }

    #[test]
    fn test_rank_by_score_breaks_ties_by_price() {
        let products = vec![record(100.0, 4.0), record(50.0, 3.0), record(75.0, 4.5)];
        let mut scored = DealScorer::new().score_and_rank(&products);
        rank_by_score(&mut scored);
        let order: Vec<f64> = scored.iter().map(ScoredProduct::price).collect();
        assert_eq!(order, vec![50.0, 75.0, 100.0]);

        let mut tied = DealScorer::new().score_and_rank(&[record(10.0, 4.0), record(10.0, 4.0)]);
        tied[1].product.price = 9.0;
        rank_by_score(&mut tied);
        assert_eq!(tied[0].price(), 9.0);
    }
}
