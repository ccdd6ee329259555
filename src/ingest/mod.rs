//! Listing ingestion.
//!
//! The shopping API returns prices and ratings as display text
//! (`"₹1,23,999"`, `"4.3 out of 5"`) and sometimes omits the store name.
//! This module turns such listings into [`ProductRecord`]s ready for
//! scoring.
//!
//! [`ProductRecord`]: crate::model::ProductRecord

mod listing;
mod retailer;
mod text;

pub use listing::{
    normalize_listings, parse_listings_str, NormalizedListings, RawListing, TextOrNumber,
};
pub use retailer::{clean_retailer_name, retailer_from_link, UNKNOWN_RETAILER};
pub use text::{parse_price_text, parse_rating_text};
