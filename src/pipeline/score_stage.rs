//! Filter and scoring stage.

use crate::config::AppConfig;
use crate::filter::{filter_price_outliers, filter_relevant, top_k_relevant};
use crate::model::{ProductRecord, ScoredProduct, SearchSummary};
use crate::scoring::rank_by_score;
use crate::summary::summarize;

/// Scored products plus the summary built from them.
#[derive(Debug, Clone)]
pub struct ScoringOutcome {
    /// Scored products in input order, or best first when sorting is on
    pub products: Vec<ScoredProduct>,
    pub summary: SearchSummary,
}

impl ScoringOutcome {
    /// The selected best deal, if any.
    #[must_use]
    pub const fn best_deal(&self) -> Option<&ScoredProduct> {
        self.summary.best_deal.as_ref()
    }
}

/// Apply the configured pre-scoring filters.
///
/// Query-based filters are skipped without a query.
#[must_use]
pub fn apply_filters(
    products: Vec<ProductRecord>,
    query: Option<&str>,
    config: &AppConfig,
) -> Vec<ProductRecord> {
    let filtering = &config.filtering;
    let mut products = products;

    if let Some(query) = query {
        if filtering.relevance {
            products = filter_relevant(products, query);
        }
        if let Some(k) = filtering.top_k {
            products = top_k_relevant(query, &products, k);
        }
    }
    if filtering.drop_outliers {
        products = filter_price_outliers(products, filtering.outlier_multiplier);
    }

    products
}

/// Filter, score and summarize one result set.
#[must_use]
pub fn score_products(
    products: Vec<ProductRecord>,
    query: Option<&str>,
    config: &AppConfig,
) -> ScoringOutcome {
    let before = products.len();
    let products = apply_filters(products, query, config);
    if products.len() != before && !config.behavior.quiet {
        tracing::info!("Filters kept {} of {} products", products.len(), before);
    }

    let mut scored = config.scorer().score_and_rank(&products);
    if config.output.sort {
        rank_by_score(&mut scored);
    }
    if !config.behavior.quiet {
        tracing::info!("Scored {} products", scored.len());
    }

    let summary = summarize(query, scored.clone(), &config.selection);
    ScoringOutcome {
        products: scored,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("iPhone 14 A", 100.0, 4.0),
            ProductRecord::new("iPhone 14 B", 50.0, 3.0),
            ProductRecord::new("iPhone 14 C", 75.0, 4.5),
        ]
    }

    #[test]
    fn test_score_products_keeps_input_order() {
        let outcome = score_products(worked_example(), None, &AppConfig::default());
        let scores: Vec<f64> = outcome.products.iter().map(|p| p.final_score).collect();
        assert_eq!(scores, vec![0.24, 0.88, 0.62]);
        assert_eq!(outcome.best_deal().unwrap().name(), "iPhone 14 C");
    }

    #[test]
    fn test_score_products_sorted() {
        let config = AppConfig::builder().sort(true).build();
        let outcome = score_products(worked_example(), None, &config);
        let names: Vec<&str> = outcome.products.iter().map(ScoredProduct::name).collect();
        assert_eq!(names, vec!["iPhone 14 B", "iPhone 14 C", "iPhone 14 A"]);
    }

    #[test]
    fn test_relevance_filter_needs_query() {
        let mut products = worked_example();
        products.push(ProductRecord::new("iPhone 14 Case", 5.0, 4.8));
        let config = AppConfig::builder().relevance(true).build();

        assert_eq!(apply_filters(products.clone(), None, &config).len(), 4);
        assert_eq!(apply_filters(products, Some("iphone 14"), &config).len(), 3);
    }

    #[test]
    fn test_outlier_filter() {
        let mut products = worked_example();
        products.push(ProductRecord::new("iPhone 14 D", 90.0, 4.0));
        products.push(ProductRecord::new("iPhone 14 Gold Edition", 100_000.0, 5.0));
        let config = AppConfig::builder().drop_outliers(true).build();
        let outcome = score_products(products, None, &config);
        // sorted prices 50 75 90 100 100000: band [37.5, 137.5]
        assert_eq!(outcome.products.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        let outcome = score_products(Vec::new(), Some("x"), &AppConfig::default());
        assert!(outcome.products.is_empty());
        assert!(outcome.best_deal().is_none());
    }
}
