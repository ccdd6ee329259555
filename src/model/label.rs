//! Recommendation labels attached to scored products.

use serde::{Deserialize, Serialize};

/// Human-readable verdict derived from a product's final score.
///
/// Variants are ordered from best to worst, so `Ord` compares "goodness"
/// in reverse: `ExcellentDeal < GoodValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DealLabel {
    #[serde(rename = "Excellent Deal")]
    ExcellentDeal,
    #[serde(rename = "Good Value")]
    GoodValue,
    #[serde(rename = "Fair")]
    Fair,
    /// Only produced when a lower `fair` threshold is configured
    #[serde(rename = "Consider Waiting")]
    ConsiderWaiting,
}

impl DealLabel {
    /// Display text for this label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExcellentDeal => "Excellent Deal",
            Self::GoodValue => "Good Value",
            Self::Fair => "Fair",
            Self::ConsiderWaiting => "Consider Waiting",
        }
    }

    /// Short buying advice, shown after the best deal in summary reports.
    #[must_use]
    pub const fn advice(&self) -> &'static str {
        match self {
            Self::ExcellentDeal => "buy now",
            Self::GoodValue => "worth buying",
            Self::Fair => "compare before buying",
            Self::ConsiderWaiting => "wait for a better price",
        }
    }

    /// All labels, best first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ExcellentDeal,
            Self::GoodValue,
            Self::Fair,
            Self::ConsiderWaiting,
        ]
    }
}

impl std::fmt::Display for DealLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
