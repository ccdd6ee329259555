//! Deal scoring and best-deal selection.
//!
//! This is the core of the crate: pure functions over plain data, with no
//! presentation concerns. Scores depend on the price range of the set they
//! were computed in and are only comparable within that set.
//!
//! ```
//! use deal_scorer::model::ProductRecord;
//! use deal_scorer::scoring::{score_and_rank, select_best_deal, SelectionPolicy};
//!
//! let products = vec![
//!     ProductRecord::new("A", 100.0, 4.0),
//!     ProductRecord::new("B", 50.0, 3.0),
//!     ProductRecord::new("C", 75.0, 4.5),
//! ];
//! let scored = score_and_rank(&products);
//! let best = select_best_deal(&scored, &SelectionPolicy::default()).unwrap();
//! assert_eq!(best.name(), "C");
//! ```

mod config;
mod scorer;
mod selection;

pub use config::{
    LabelThresholds, ScoringWeights, SelectionPolicy, DEFAULT_MIN_RATING, DEFAULT_PRICE_WEIGHT,
    DEFAULT_RATING_WEIGHT, MAX_RATING,
};
pub use scorer::{rank_by_score, DealScorer};
pub use selection::select_best_deal;

use crate::model::{ProductRecord, ScoredProduct};

/// Score products with the default 70/30 weights.
///
/// Shorthand for `DealScorer::new().score_and_rank(products)`.
#[must_use]
pub fn score_and_rank(products: &[ProductRecord]) -> Vec<ScoredProduct> {
    DealScorer::new().score_and_rank(products)
}
