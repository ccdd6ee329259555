//! Search summary: per-retailer grouping, price statistics and the
//! recommendation text shown next to the results.

use crate::ingest::UNKNOWN_RETAILER;
use crate::model::{PlatformProducts, PriceStats, ScoredProduct, SearchSummary};
use crate::scoring::{rank_by_score, select_best_deal, SelectionPolicy};
use indexmap::IndexMap;

/// Recommendation text for an empty result set.
pub const NO_PRODUCTS_MESSAGE: &str = "No products found for your search.";

/// Build the summary for one scored result set.
///
/// Retailers keep first-seen order and are then sorted by their lowest
/// price (stable, so ties keep first-seen order). Products inside a
/// retailer are ranked best first. The best deal is picked over the whole
/// set with `policy`.
#[must_use]
pub fn summarize(
    query: Option<&str>,
    scored: Vec<ScoredProduct>,
    policy: &SelectionPolicy,
) -> SearchSummary {
    let product_count = scored.len();
    let stats = PriceStats::of(&scored);
    let best_deal = select_best_deal(&scored, policy).cloned();

    let mut groups: IndexMap<String, Vec<ScoredProduct>> = IndexMap::new();
    for product in scored {
        let platform = if product.retailer().trim().is_empty() {
            UNKNOWN_RETAILER.to_string()
        } else {
            product.retailer().to_string()
        };
        groups.entry(platform).or_default().push(product);
    }

    let mut platforms: Vec<PlatformProducts> = groups
        .into_iter()
        .map(|(platform, mut products)| {
            rank_by_score(&mut products);
            let stats = PriceStats::of(&products);
            PlatformProducts {
                platform,
                products,
                stats,
            }
        })
        .collect();
    platforms.sort_by(|a, b| lowest_price(a).total_cmp(&lowest_price(b)));

    let ai_recommendation = recommendation_text(best_deal.as_ref(), product_count, platforms.len(), stats);

    tracing::debug!(
        "Summarized {} products across {} platforms",
        product_count,
        platforms.len()
    );

    SearchSummary {
        query: query.map(str::to_string),
        platforms,
        stats,
        best_deal,
        ai_recommendation,
        product_count,
    }
}

fn lowest_price(platform: &PlatformProducts) -> f64 {
    platform.stats.map_or(f64::INFINITY, |s| s.low)
}

/// Render the recommendation line.
#[must_use]
pub fn recommendation_text(
    best: Option<&ScoredProduct>,
    product_count: usize,
    platform_count: usize,
    stats: Option<PriceStats>,
) -> String {
    let Some(best) = best else {
        return NO_PRODUCTS_MESSAGE.to_string();
    };

    let retailer = if best.retailer().is_empty() {
        UNKNOWN_RETAILER
    } else {
        best.retailer()
    };
    let range = stats.map_or_else(
        || "price range not available".to_string(),
        |s| format!("price range ₹{} - ₹{}", format_price(s.low), format_price(s.high)),
    );

    format!(
        "Best Deal: {} from {} | Price: ₹{} | Rating: {:.1}/5 | {}. Found {} products across {} platforms, {}.",
        best.name(),
        retailer,
        format_price(best.price()),
        best.rating(),
        best.recommendation,
        product_count,
        platform_count,
        range
    )
}

/// Whole-rupee price with thousands separators: `123999.5` -> `"124,000"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }
    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRecord;
    use crate::scoring::DealScorer;

    fn scored(records: Vec<ProductRecord>) -> Vec<ScoredProduct> {
        DealScorer::new().score_and_rank(&records)
    }

    fn sample() -> Vec<ScoredProduct> {
        scored(vec![
            ProductRecord::new("Phone A", 100.0, 4.0).with_retailer("Amazon"),
            ProductRecord::new("Phone B", 50.0, 3.0).with_retailer("Flipkart"),
            ProductRecord::new("Phone C", 75.0, 4.5).with_retailer("Amazon"),
        ])
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1_000.0), "1,000");
        assert_eq!(format_price(123_999.5), "124,000");
        assert_eq!(format_price(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_summarize_groups_by_retailer() {
        let summary = summarize(Some("phone"), sample(), &SelectionPolicy::default());

        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.platform_count(), 2);
        // Flipkart has the lowest price, so it comes first
        assert_eq!(summary.platforms[0].platform, "Flipkart");
        assert_eq!(summary.platforms[1].platform, "Amazon");
        // Amazon products ranked best first: C (0.62) before A (0.24)
        assert_eq!(summary.platforms[1].products[0].name(), "Phone C");
        assert_eq!(summary.products().count(), 3);
    }

    #[test]
    fn test_summarize_stats_and_best_deal() {
        let summary = summarize(None, sample(), &SelectionPolicy::default());
        let stats = summary.stats.unwrap();
        assert_eq!(stats.low, 50.0);
        assert_eq!(stats.avg, 75.0);
        assert_eq!(stats.high, 100.0);
        assert_eq!(summary.best_deal.as_ref().unwrap().name(), "Phone C");
        assert!(summary.query.is_none());
    }

    #[test]
    fn test_recommendation_text() {
        let summary = summarize(Some("phone"), sample(), &SelectionPolicy::default());
        assert_eq!(
            summary.ai_recommendation,
            "Best Deal: Phone C from Amazon | Price: ₹75 | Rating: 4.5/5 | Good Value. \
             Found 3 products across 2 platforms, price range ₹50 - ₹100."
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(Some("phone"), Vec::new(), &SelectionPolicy::default());
        assert_eq!(summary.ai_recommendation, NO_PRODUCTS_MESSAGE);
        assert!(summary.best_deal.is_none());
        assert!(summary.platforms.is_empty());
        assert!(summary.stats.is_none());
    }

    #[test]
    fn test_missing_retailer_grouped_as_unknown() {
        let summary = summarize(
            None,
            scored(vec![ProductRecord::new("Phone", 10.0, 4.0)]),
            &SelectionPolicy::default(),
        );
        assert_eq!(summary.platforms[0].platform, UNKNOWN_RETAILER);
        assert!(summary.ai_recommendation.contains("from Unknown"));
    }
}
