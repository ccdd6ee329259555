//! Interquartile-range price outlier removal.

use crate::model::ProductRecord;

/// Default IQR multiplier (Tukey's fences).
pub const DEFAULT_OUTLIER_MULTIPLIER: f64 = 1.5;

/// Inclusive price band considered "normal" for a result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub lower: f64,
    pub upper: f64,
}

impl PriceBand {
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.lower <= price && price <= self.upper
    }
}

/// Compute the IQR band over the valid prices of `products`.
///
/// Quartiles are read by index from the sorted prices (`n/4` and `3n/4`),
/// and the lower fence never goes below zero.
#[must_use]
pub fn price_band(products: &[ProductRecord], multiplier: f64) -> Option<PriceBand> {
    let mut prices: Vec<f64> = products
        .iter()
        .filter(|p| p.has_valid_price())
        .map(|p| p.price)
        .collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    let n = prices.len();
    let q1 = prices[n / 4];
    let q3 = prices[(3 * n / 4).min(n - 1)];
    let iqr = q3 - q1;

    Some(PriceBand {
        lower: multiplier.mul_add(-iqr, q1).max(0.0),
        upper: multiplier.mul_add(iqr, q3),
    })
}

/// Drop products priced outside the IQR band.
///
/// Products without a valid price are dropped too. If the filter would
/// leave nothing, the input is returned unchanged.
#[must_use]
pub fn filter_price_outliers(products: Vec<ProductRecord>, multiplier: f64) -> Vec<ProductRecord> {
    let Some(band) = price_band(&products, multiplier) else {
        return products;
    };

    let total = products.len();
    let kept: Vec<ProductRecord> = products
        .iter()
        .filter(|p| p.has_valid_price() && band.contains(p.price))
        .cloned()
        .collect();

    if kept.is_empty() {
        tracing::info!(
            "No products within price range [{:.2}, {:.2}], keeping all {}",
            band.lower,
            band.upper,
            total
        );
        return products;
    }

    tracing::debug!(
        "Outlier filter kept {}/{} products in [{:.2}, {:.2}]",
        kept.len(),
        total,
        band.lower,
        band.upper
    );
    kept
}
