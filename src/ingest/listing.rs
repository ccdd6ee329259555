//! Raw upstream listings and their normalization into [`ProductRecord`]s.

use super::retailer::clean_retailer_name;
use super::text::{parse_price_text, parse_rating_text};
use crate::config::IngestConfig;
use crate::error::{DealScorerError, ErrorContext, Result};
use crate::model::ProductRecord;
use crate::summary::format_price;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object keys that may carry the listing array, in order of preference.
///
/// `inline_shopping_results` wins when it is non-empty; an empty array is
/// only used when no later key has listings.
pub const ENVELOPE_KEYS: &[&str] = &["inline_shopping_results", "shopping_results", "products"];

/// A value the upstream API sends either as a number or as display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Number(f64),
    Text(String),
}

/// One search result as returned by the shopping API.
///
/// Field aliases also accept already-normalized products, so a file of
/// [`ProductRecord`]s is a valid listing document too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(alias = "name", alias = "product_name")]
    pub title: String,
    #[serde(default)]
    pub price: Option<TextOrNumber>,
    /// Numeric price, when the API already extracted one
    #[serde(default)]
    pub extracted_price: Option<f64>,
    #[serde(default)]
    pub rating: Option<TextOrNumber>,
    /// Store name as reported upstream
    #[serde(default, alias = "retailer")]
    pub source: Option<String>,
    #[serde(default, alias = "url", alias = "product_url")]
    pub link: Option<String>,
    /// Google Shopping page, used when `link` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_link: Option<String>,
    /// Redirect link; preferred over `link` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Fallback image hosted by the search API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serpapi_thumbnail: Option<String>,
    /// Pre-discount price, when the listing shows a markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_old_price: Option<f64>,
}

impl RawListing {
    /// Resolve the price, preferring the pre-extracted number.
    #[must_use]
    pub fn resolved_price(&self, usd_to_inr: f64) -> Option<f64> {
        if let Some(price) = self.extracted_price {
            return Some(price);
        }
        match self.price.as_ref()? {
            TextOrNumber::Number(n) => Some(*n),
            TextOrNumber::Text(t) => parse_price_text(t, usd_to_inr),
        }
    }

    /// Product URL: `tracking_link`, then `link`, then `product_link`.
    #[must_use]
    pub fn resolved_link(&self) -> Option<&str> {
        first_non_empty([&self.tracking_link, &self.link, &self.product_link])
    }

    /// Link on the retailer's own site, used to name the retailer when
    /// `source` is blank. Tracking links point at the search engine.
    #[must_use]
    pub fn retailer_link(&self) -> Option<&str> {
        first_non_empty([&self.link, &self.product_link, &self.tracking_link])
    }

    /// Image URL: `thumbnail`, then `serpapi_thumbnail`.
    #[must_use]
    pub fn resolved_thumbnail(&self) -> Option<&str> {
        first_non_empty([&self.thumbnail, &self.serpapi_thumbnail])
    }

    /// Markdown text when the old price is above `price`.
    #[must_use]
    pub fn discount_text(&self, price: f64) -> Option<String> {
        let old = self
            .extracted_old_price
            .filter(|old| old.is_finite() && *old > price)?;
        let percent = ((old - price) / old * 100.0).round();
        Some(format!("{percent:.0}% off (was ₹{})", format_price(old)))
    }

    /// Resolve the rating, if any was given.
    #[must_use]
    pub fn resolved_rating(&self) -> Option<f64> {
        match self.rating.as_ref()? {
            TextOrNumber::Number(n) => Some(*n),
            TextOrNumber::Text(t) => parse_rating_text(t),
        }
    }
}

/// Result of normalizing a batch of listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedListings {
    pub products: Vec<ProductRecord>,
    /// Listings skipped for lacking a positive price
    pub dropped: usize,
    /// Listings that had no rating and received the default
    pub defaulted_ratings: usize,
}

/// Turn raw listings into product records.
///
/// Listings without a positive price are skipped; listings without a
/// rating get `config.default_rating`.
#[must_use]
pub fn normalize_listings(raw: &[RawListing], config: &IngestConfig) -> NormalizedListings {
    let mut out = NormalizedListings::default();

    for listing in raw {
        let price = match listing.resolved_price(config.usd_to_inr) {
            Some(p) if p.is_finite() && p > 0.0 => p,
            other => {
                tracing::debug!(
                    "Skipping '{}' due to invalid price: {:?}",
                    listing.title,
                    other
                );
                out.dropped += 1;
                continue;
            }
        };

        let discount = listing.discount_text(price);
        if let Some(text) = &discount {
            tracing::debug!("'{}' is marked down: {text}", listing.title);
        }

        let rating = listing.resolved_rating().unwrap_or_else(|| {
            out.defaulted_ratings += 1;
            config.default_rating
        });

        let link = listing.resolved_link().unwrap_or_default();
        let retailer = clean_retailer_name(
            listing.source.as_deref(),
            listing.retailer_link().unwrap_or_default(),
        );

        out.products.push(
            ProductRecord::new(listing.title.trim(), price, rating)
                .with_retailer(retailer)
                .with_url(link)
                .with_image_url(listing.resolved_thumbnail().map(str::to_string))
                .with_discount(discount),
        );
    }

    tracing::debug!(
        "Normalized {} listings ({} dropped, {} default ratings)",
        out.products.len(),
        out.dropped,
        out.defaulted_ratings
    );
    out
}

fn first_non_empty<const N: usize>(candidates: [&Option<String>; N]) -> Option<&str> {
    candidates
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|s| !s.trim().is_empty())
}

/// Parse a listing document.
///
/// Accepts a JSON array of listings, or an object carrying the array under
/// one of [`ENVELOPE_KEYS`] (the upstream response envelope).
pub fn parse_listings_str(content: &str) -> Result<Vec<RawListing>> {
    let value: Value = serde_json::from_str(content).context("parsing listing document")?;

    let array = match value {
        Value::Array(items) => items,
        Value::Object(map) => envelope_listings(map)
            .ok_or_else(|| DealScorerError::unknown_shape("listing document", ENVELOPE_KEYS))?,
        _ => return Err(DealScorerError::unknown_shape("listing document", ENVELOPE_KEYS)),
    };

    array
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<RawListing>(item)
                .with_context(|| format!("listing #{i}"))
        })
        .collect()
}

/// First non-empty listing array under [`ENVELOPE_KEYS`], else the first
/// empty one.
fn envelope_listings(mut map: serde_json::Map<String, Value>) -> Option<Vec<Value>> {
    let mut empty = None;
    for key in ENVELOPE_KEYS {
        match map.remove(*key) {
            Some(Value::Array(items)) if !items.is_empty() => {
                tracing::debug!("Reading {} listings from '{key}'", items.len());
                return Some(items);
            }
            Some(Value::Array(items)) => {
                empty.get_or_insert(items);
            }
            _ => {}
        }
    }
    empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputErrorKind;

    fn listing(title: &str, price: TextOrNumber, rating: Option<TextOrNumber>) -> RawListing {
        RawListing {
            title: title.to_string(),
            price: Some(price),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_text_fields() {
        let raw = vec![RawListing {
            title: " Phone X ".to_string(),
            price: Some(TextOrNumber::Text("₹12,999".to_string())),
            rating: Some(TextOrNumber::Text("4.4 out of 5".to_string())),
            source: Some("amazon.in".to_string()),
            link: Some("https://www.amazon.in/dp/1".to_string()),
            ..Default::default()
        }];
        let out = normalize_listings(&raw, &IngestConfig::default());
        assert_eq!(out.products.len(), 1);
        let p = &out.products[0];
        assert_eq!(p.name, "Phone X");
        assert_eq!(p.price, 12_999.0);
        assert_eq!(p.rating, 4.4);
        assert_eq!(p.retailer, "Amazon");
        assert_eq!(p.url, "https://www.amazon.in/dp/1");
    }

    #[test]
    fn test_extracted_price_wins() {
        let mut l = listing("a", TextOrNumber::Text("₹1".to_string()), None);
        l.extracted_price = Some(500.0);
        assert_eq!(l.resolved_price(83.0), Some(500.0));
    }

    #[test]
    fn test_drops_unpriced_listings() {
        let raw = vec![
            listing("free", TextOrNumber::Number(0.0), None),
            listing("none", TextOrNumber::Text("N/A".to_string()), None),
            listing("ok", TextOrNumber::Number(10.0), Some(TextOrNumber::Number(4.0))),
        ];
        let out = normalize_listings(&raw, &IngestConfig::default());
        assert_eq!(out.products.len(), 1);
        assert_eq!(out.dropped, 2);
    }

    #[test]
    fn test_missing_rating_gets_default() {
        let raw = vec![listing("a", TextOrNumber::Number(10.0), None)];
        let config = IngestConfig {
            default_rating: 3.0,
            ..IngestConfig::default()
        };
        let out = normalize_listings(&raw, &config);
        assert_eq!(out.products[0].rating, 3.0);
        assert_eq!(out.defaulted_ratings, 1);
    }

    #[test]
    fn test_parse_array_document() {
        let json = r#"[{"title":"A","price":"₹100","source":"Croma","link":"https://croma.com/a"}]"#;
        let listings = parse_listings_str(json).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].source.as_deref(), Some("Croma"));
    }

    #[test]
    fn test_parse_envelope_document() {
        let json = r#"{"search_metadata":{},"shopping_results":[{"title":"A","extracted_price":99.0}]}"#;
        let listings = parse_listings_str(json).unwrap();
        assert_eq!(listings[0].extracted_price, Some(99.0));
    }

    #[test]
    fn test_parse_normalized_products() {
        let json = r#"{"products":[{"name":"A","price":10.0,"rating":4.0,"retailer":"Amazon","url":"u"}]}"#;
        let listings = parse_listings_str(json).unwrap();
        assert_eq!(listings[0].title, "A");
        assert_eq!(listings[0].source.as_deref(), Some("Amazon"));
        assert_eq!(listings[0].link.as_deref(), Some("u"));
    }

    #[test]
    fn test_inline_results_win_over_shopping_results() {
        let json = r#"{
            "inline_shopping_results": [{"title": "Inline", "price": "₹100"}],
            "shopping_results": [{"title": "Organic", "price": "₹90"}]
        }"#;
        let listings = parse_listings_str(json).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Inline");
    }

    #[test]
    fn test_empty_inline_results_fall_back() {
        let json = r#"{
            "inline_shopping_results": [],
            "shopping_results": [{"title": "Organic", "price": "₹90"}]
        }"#;
        assert_eq!(parse_listings_str(json).unwrap()[0].title, "Organic");

        let only_empty = r#"{"inline_shopping_results": []}"#;
        assert!(parse_listings_str(only_empty).unwrap().is_empty());
    }

    #[test]
    fn test_link_preference() {
        let json = r#"[
            {"title": "a", "link": "https://www.amazon.in/a", "tracking_link": "https://track.example/a",
             "product_link": "https://shopping.example/a"},
            {"title": "b", "link": "", "product_link": "https://www.flipkart.com/b"},
            {"title": "c", "link": "https://www.croma.com/c", "tracking_link": " "}
        ]"#;
        let listings = parse_listings_str(json).unwrap();
        let links: Vec<Option<&str>> = listings.iter().map(RawListing::resolved_link).collect();
        assert_eq!(
            links,
            vec![
                Some("https://track.example/a"),
                Some("https://www.flipkart.com/b"),
                Some("https://www.croma.com/c"),
            ]
        );
    }

    #[test]
    fn test_retailer_named_from_shop_link_not_tracking_link() {
        let json = r#"[{"title": "a", "price": 10,
            "link": "https://www.flipkart.com/a",
            "tracking_link": "https://www.google.com/aclk?sa=l"}]"#;
        let raw = parse_listings_str(json).unwrap();
        let out = normalize_listings(&raw, &IngestConfig::default());
        assert_eq!(out.products[0].retailer, "Flipkart");
        assert_eq!(out.products[0].url, "https://www.google.com/aclk?sa=l");
    }

    #[test]
    fn test_thumbnail_fallback() {
        let json = r#"[
            {"title": "a", "price": 10, "thumbnail": "t.jpg", "serpapi_thumbnail": "s.jpg"},
            {"title": "b", "price": 10, "serpapi_thumbnail": "s.jpg"},
            {"title": "c", "price": 10}
        ]"#;
        let raw = parse_listings_str(json).unwrap();
        let out = normalize_listings(&raw, &IngestConfig::default());
        let images: Vec<Option<&str>> =
            out.products.iter().map(|p| p.image_url.as_deref()).collect();
        assert_eq!(images, vec![Some("t.jpg"), Some("s.jpg"), None]);
    }

    #[test]
    fn test_discount_from_old_price() {
        let json = r#"[
            {"title": "Phone", "price": "₹800", "extracted_old_price": 1000.0, "rating": 4.5},
            {"title": "Tablet", "price": "₹24,999", "extracted_old_price": 31999, "rating": 4.2},
            {"title": "Watch", "price": "₹500", "extracted_old_price": 400.0}
        ]"#;
        let raw = parse_listings_str(json).unwrap();
        let out = normalize_listings(&raw, &IngestConfig::default());

        assert_eq!(out.products[0].discount.as_deref(), Some("20% off (was ₹1,000)"));
        assert_eq!(out.products[1].discount.as_deref(), Some("22% off (was ₹31,999)"));
        // An "old" price below the current one is not a markdown
        assert_eq!(out.products[2].discount, None);
    }

    #[test]
    fn test_unknown_shape_names_expected_keys() {
        let err = parse_listings_str(r#"{"error": "no results"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to read listings: listing document is not a JSON array or an object with one of: \
             inline_shopping_results, shopping_results, products"
        );
    }

    #[test]
    fn test_parse_unknown_shape() {
        let err = parse_listings_str(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(
            err,
            DealScorerError::Input {
                source: InputErrorKind::UnknownShape,
                ..
            }
        ));
        assert!(parse_listings_str("42").is_err());
    }

    #[test]
    fn test_parse_bad_item_names_index() {
        let err = parse_listings_str(r#"[{"title":"ok"},{"price":1}]"#).unwrap_err();
        assert!(err.to_string().contains("listing #1"), "got: {err}");
    }
}
