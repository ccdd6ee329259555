//! Listing document reading and normalization.

use super::PipelineError;
use crate::config::IngestConfig;
use crate::ingest::{normalize_listings, parse_listings_str, NormalizedListings};
use crate::model::ProductRecord;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Listings read from one input document.
#[derive(Debug, Clone)]
pub struct ParsedListings {
    /// Where the listings came from (`-` for stdin)
    pub source: String,
    /// Number of listings in the document
    pub raw_count: usize,
    /// Normalized products and drop counts
    pub normalized: NormalizedListings,
}

impl ParsedListings {
    /// The products ready for scoring.
    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        &self.normalized.products
    }

    /// Consume and return the products.
    #[must_use]
    pub fn into_products(self) -> Vec<ProductRecord> {
        self.normalized.products
    }
}

/// Read the whole input document; `-` reads stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read listings from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings file: {}", path.display()))
}

/// Read, parse and normalize a listing document with context for error messages
pub fn parse_listings_with_context(
    path: &Path,
    ingest: &IngestConfig,
    quiet: bool,
) -> Result<ParsedListings> {
    let source = path.display().to_string();
    if !quiet {
        tracing::info!("Reading listings: {}", source);
    }

    let content = read_input(path)?;
    let raw = parse_listings_str(&content).map_err(|e| PipelineError::ParseFailed {
        path: source.clone(),
        source: e.into(),
    })?;
    let normalized = normalize_listings(&raw, ingest);

    if normalized.dropped > 0 {
        tracing::warn!(
            "Skipped {} of {} listings without a usable price",
            normalized.dropped,
            raw.len()
        );
    }
    if !quiet {
        tracing::info!("Parsed {} products", normalized.products.len());
    }

    Ok(ParsedListings {
        source,
        raw_count: raw.len(),
        normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_listings_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("listings.json");
        std::fs::write(
            &path,
            r#"{"shopping_results": [
                {"title": "Phone", "price": "₹1,999", "rating": 4.1, "source": "Flipkart"},
                {"title": "Broken", "price": "N/A"}
            ]}"#,
        )
        .unwrap();

        let parsed = parse_listings_with_context(&path, &IngestConfig::default(), true).unwrap();
        assert_eq!(parsed.raw_count, 2);
        assert_eq!(parsed.normalized.dropped, 1);
        assert_eq!(parsed.products()[0].price, 1999.0);
        assert_eq!(parsed.into_products().len(), 1);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_listings_with_context(
            Path::new("/nonexistent/listings.json"),
            &IngestConfig::default(),
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read listings file"));
    }

    #[test]
    fn test_parse_bad_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"results": 3}"#).unwrap();

        let err =
            parse_listings_with_context(&path, &IngestConfig::default(), true).unwrap_err();
        assert!(err.to_string().starts_with("Parse failed for"));
    }
}
