//! Best-deal selection over a scored result set.

use super::config::SelectionPolicy;
use super::scorer::compare_deals;
use crate::model::ScoredProduct;
use std::cmp::Ordering;

/// Pick the single best deal.
///
/// Candidates are the products rated strictly above
/// `policy.min_rating`; among them the highest final score wins, with ties
/// going to the lower price. When no product clears the rating bar the
/// whole set is considered instead, so a non-empty input always yields a
/// pick.
///
/// Returns `None` only for an empty input.
#[must_use]
pub fn select_best_deal<'a>(
    scored: &'a [ScoredProduct],
    policy: &SelectionPolicy,
) -> Option<&'a ScoredProduct> {
    let rated = best_of(scored.iter().filter(|s| s.rating() > policy.min_rating));
    if rated.is_some() {
        return rated;
    }

    let fallback = best_of(scored.iter());
    if let Some(pick) = fallback {
        tracing::warn!(
            "No product rated above {:.1}; falling back to '{}'",
            policy.min_rating,
            pick.name()
        );
    }
    fallback
}

/// First product that no later product beats.
fn best_of<'a>(items: impl Iterator<Item = &'a ScoredProduct>) -> Option<&'a ScoredProduct> {
    items.reduce(|best, candidate| {
        if compare_deals(candidate, best) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRecord;
    use crate::scoring::DealScorer;

    fn scored(items: &[(f64, f64)]) -> Vec<ScoredProduct> {
        let products: Vec<ProductRecord> = items
            .iter()
            .enumerate()
            .map(|(i, &(price, rating))| ProductRecord::new(format!("p{i}"), price, rating))
            .collect();
        DealScorer::new().score_and_rank(&products)
    }

    #[test]
    fn test_worked_example_picks_well_rated_item() {
        let set = scored(&[(100.0, 4.0), (50.0, 3.0), (75.0, 4.5)]);
        let best = select_best_deal(&set, &SelectionPolicy::default()).unwrap();
        assert_eq!(best.name(), "p2");
        assert_eq!(best.price(), 75.0);
    }

    #[test]
    fn test_empty_returns_none() {
        assert!(select_best_deal(&[], &SelectionPolicy::default()).is_none());
    }

    #[test]
    fn test_fallback_when_no_rating_clears_bar() {
        let set = scored(&[(100.0, 2.0), (50.0, 3.5), (75.0, 1.0)]);
        let best = select_best_deal(&set, &SelectionPolicy::default()).unwrap();
        assert_eq!(best.price(), 50.0);
    }

    #[test]
    fn test_rating_threshold_is_exclusive() {
        // 3.5 exactly is not a candidate, so the 4.0 item wins despite a lower score.
        let set = scored(&[(10.0, 3.5), (100.0, 4.0)]);
        let best = select_best_deal(&set, &SelectionPolicy::default()).unwrap();
        assert_eq!(best.rating(), 4.0);
    }

    #[test]
    fn test_tie_breaks_on_lower_price() {
        let mut set = scored(&[(10.0, 4.0), (10.0, 4.0)]);
        set[1].product.price = 8.0;
        let best = select_best_deal(&set, &SelectionPolicy::default()).unwrap();
        assert_eq!(best.price(), 8.0);
    }

    #[test]
    fn test_full_tie_keeps_first() {
        let set = scored(&[(10.0, 4.0), (10.0, 4.0)]);
        let best = select_best_deal(&set, &SelectionPolicy::default()).unwrap();
        assert_eq!(best.name(), "p0");
    }

    #[test]
    fn test_custom_min_rating() {
        let set = scored(&[(10.0, 4.2), (20.0, 4.8)]);
        let policy = SelectionPolicy { min_rating: 4.5 };
        let best = select_best_deal(&set, &policy).unwrap();
        assert_eq!(best.price(), 20.0);
    }
}
