//! Data model for product listings and their scores.
//!
//! [`ProductRecord`] is the normalized shape every upstream listing is
//! turned into before scoring. [`ScoredProduct`] adds the derived score and
//! recommendation label; scores only make sense relative to the result set
//! they were computed in, so nothing here carries a query identity or is
//! meant to be cached.

mod label;
mod product;
mod summary;

pub use label::*;
pub use product::*;
pub use summary::*;
