//! Named presets for deal-scorer.

use super::types::{AppConfig, FilterConfig, ScoringConfig};
use crate::error::DealScorerError;
use crate::scoring::{LabelThresholds, SelectionPolicy};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common shopping styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default 70/30 price/rating balance
    Default,
    /// Price-first: cheapest acceptable listing wins
    Budget,
    /// Rating-first: equal weights and a higher rating bar
    Quality,
    /// Filters accessories and outliers, four-tier labels
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Budget => "budget",
            Self::Quality => "quality",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "budget" | "cheap" | "price" => Some(Self::Budget),
            "quality" | "rating" => Some(Self::Quality),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "70% price, 30% rating; best deal must be rated above 3.5",
            Self::Budget => "85% price, 15% rating for price-sensitive shopping",
            Self::Quality => "Equal price and rating weights; best deal must be rated above 4.0",
            Self::Strict => {
                "Drops accessories and price outliers, adds a 'Consider Waiting' label"
            }
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Budget, Self::Quality, Self::Strict]
    }
}

impl std::str::FromStr for ConfigPreset {
    type Err = DealScorerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| {
            let valid: Vec<&str> = Self::all().iter().map(Self::name).collect();
            DealScorerError::config(format!(
                "unknown preset '{name}' (valid: {})",
                valid.join(", ")
            ))
        })
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Budget => Self::budget_preset(),
            ConfigPreset::Quality => Self::quality_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    /// Budget preset.
    #[must_use]
    pub fn budget_preset() -> Self {
        Self {
            scoring: ScoringConfig {
                price_weight: 0.85,
                rating_weight: 0.15,
                labels: LabelThresholds::default(),
            },
            ..Self::default()
        }
    }

    /// Quality preset.
    ///
    /// - Equal weights
    /// - Best deal must be rated above 4.0
    #[must_use]
    pub fn quality_preset() -> Self {
        Self {
            scoring: ScoringConfig {
                price_weight: 0.5,
                rating_weight: 0.5,
                labels: LabelThresholds::default(),
            },
            selection: SelectionPolicy { min_rating: 4.0 },
            ..Self::default()
        }
    }

    /// Strict preset.
    ///
    /// - Relevance and outlier filtering on
    /// - Scores under 0.4 are labeled "Consider Waiting"
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            scoring: ScoringConfig {
                labels: LabelThresholds::four_tier(),
                ..ScoringConfig::default()
            },
            filtering: FilterConfig {
                relevance: true,
                drop_outliers: true,
                ..FilterConfig::default()
            },
            ..Self::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
