//! Price-ratio advisory (gold/silver by default)
//!
//! Bands are evaluated top-down with strict inequalities, so a ratio exactly on
//! either edge is `Balanced`.

use crate::assumptions::Assumptions;
use crate::params::RatioParameters;
use serde::{Deserialize, Serialize};

/// Advisory band for a price ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryBand {
    /// ratio above the upper edge
    SecondUndervalued,
    /// ratio below the lower edge
    FirstUndervalued,
    Balanced,
}

/// Display tone of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Amber,
    Green,
}

impl AdvisoryBand {
    pub fn label(&self) -> &'static str {
        match self {
            AdvisoryBand::SecondUndervalued => "Silver looks undervalued — consider buying silver.",
            AdvisoryBand::FirstUndervalued => "Gold looks undervalued — consider buying gold.",
            AdvisoryBand::Balanced => "Market looks balanced — consider both.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdvisoryBand::SecondUndervalued => "💎",
            AdvisoryBand::FirstUndervalued => "🌟",
            AdvisoryBand::Balanced => "⚖️",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AdvisoryBand::SecondUndervalued => Tone::Blue,
            AdvisoryBand::FirstUndervalued => Tone::Amber,
            AdvisoryBand::Balanced => Tone::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioResult {
    pub ratio: f64,
    pub band: AdvisoryBand,
    pub label: String,
    pub icon: String,
    pub tone: Tone,
}

/// Band for a ratio given the band edges in `assumptions`
pub fn classify_ratio(ratio: f64, assumptions: &Assumptions) -> AdvisoryBand {
    if ratio > assumptions.ratio_upper {
        AdvisoryBand::SecondUndervalued
    } else if ratio < assumptions.ratio_lower {
        AdvisoryBand::FirstUndervalued
    } else {
        AdvisoryBand::Balanced
    }
}

pub fn calculate_ratio(prices: &RatioParameters) -> RatioResult {
    calculate_ratio_with(prices, &Assumptions::default())
}

pub fn calculate_ratio_with(prices: &RatioParameters, assumptions: &Assumptions) -> RatioResult {
    let ratio = prices.price_a() / prices.price_b();
    let band = classify_ratio(ratio, assumptions);
    log::debug!("ratio {:.4} -> {:?}", ratio, band);

    RatioResult {
        ratio,
        band,
        label: band.label().to_string(),
        icon: band.icon().to_string(),
        tone: band.tone(),
    }
}
