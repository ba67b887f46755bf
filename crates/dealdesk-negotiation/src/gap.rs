//! Counter-offer gap analysis
//!
//! Measures how far a brand's offer sits from the creator's fair rate.

use dealdesk_core::round_half_away;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of the gap the compromise counter closes, toward the fair rate
const COMPROMISE_SHARE: f64 = 0.6;

/// Classification of a gap by its percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapLevel {
    /// Offer more than 15% above the fair rate
    Above,
    /// Within 15% either way
    Fair,
    /// 15-30% below
    Below,
    /// 30-50% below
    Significant,
    /// More than 50% below
    Severe,
}

impl GapLevel {
    /// Classify a rounded percent gap (positive means the offer is low)
    pub fn from_percent(percent_gap: i64) -> Self {
        match percent_gap {
            i64::MIN..=-16 => GapLevel::Above,
            -15..=15 => GapLevel::Fair,
            16..=30 => GapLevel::Below,
            31..=50 => GapLevel::Significant,
            _ => GapLevel::Severe,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GapLevel::Above => "Their offer is above your fair rate. You can accept with confidence.",
            GapLevel::Fair => "Their offer is within 15% of your fair rate. A small counter or a yes both work.",
            GapLevel::Below => "Their offer is 15-30% below your fair rate. Counter with your rate and explain it.",
            GapLevel::Significant => "Their offer is 30-50% below your fair rate. Negotiate firmly or reduce the scope.",
            GapLevel::Severe => "Their offer is more than 50% below your fair rate. Be ready to walk away.",
        }
    }

    /// Presentation hint for callers that render the assessment
    pub fn color(&self) -> &'static str {
        match self {
            GapLevel::Above | GapLevel::Fair => "green",
            GapLevel::Below => "yellow",
            GapLevel::Significant => "orange",
            GapLevel::Severe => "red",
        }
    }
}

impl fmt::Display for GapLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GapLevel::Above => write!(f, "above"),
            GapLevel::Fair => write!(f, "fair"),
            GapLevel::Below => write!(f, "below"),
            GapLevel::Significant => write!(f, "significant"),
            GapLevel::Severe => write!(f, "severe"),
        }
    }
}

/// Gap between a fair rate and an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAssessment {
    pub dollar_gap: i64,
    pub percent_gap: i64,
    pub warning_level: GapLevel,
    pub warning_message: String,
    pub warning_color: String,
}

impl GapAssessment {
    /// The offer is at or near the fair rate
    pub fn is_acceptable(&self) -> bool {
        matches!(self.warning_level, GapLevel::Above | GapLevel::Fair)
    }
}

/// Unrounded percent of the fair rate the offer falls short by
pub(crate) fn raw_percent_gap(fair_rate: f64, brand_offer: f64) -> f64 {
    (fair_rate - brand_offer) / fair_rate * 100.0
}

/// Assess a brand offer against the fair rate
///
/// `fair_rate` must be non-zero.
pub fn analyze(fair_rate: f64, brand_offer: f64) -> GapAssessment {
    let percent_gap = round_half_away(raw_percent_gap(fair_rate, brand_offer));
    let level = GapLevel::from_percent(percent_gap);

    GapAssessment {
        dollar_gap: round_half_away(fair_rate - brand_offer),
        percent_gap,
        warning_level: level,
        warning_message: level.message().to_string(),
        warning_color: level.color().to_string(),
    }
}

/// Counter that closes 60% of the gap toward the fair rate
pub fn compromise_rate(fair_rate: f64, brand_offer: f64) -> i64 {
    round_half_away(brand_offer + COMPROMISE_SHARE * (fair_rate - brand_offer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_level_boundaries() {
        assert_eq!(GapLevel::from_percent(-16), GapLevel::Above);
        assert_eq!(GapLevel::from_percent(-15), GapLevel::Fair);
        assert_eq!(GapLevel::from_percent(0), GapLevel::Fair);
        assert_eq!(GapLevel::from_percent(15), GapLevel::Fair);
        assert_eq!(GapLevel::from_percent(16), GapLevel::Below);
        assert_eq!(GapLevel::from_percent(30), GapLevel::Below);
        assert_eq!(GapLevel::from_percent(31), GapLevel::Significant);
        assert_eq!(GapLevel::from_percent(50), GapLevel::Significant);
        assert_eq!(GapLevel::from_percent(51), GapLevel::Severe);
    }

    #[test]
    fn test_analyze_low_offer() {
        let gap = analyze(1000.0, 600.0);
        assert_eq!(gap.dollar_gap, 400);
        assert_eq!(gap.percent_gap, 40);
        assert_eq!(gap.warning_level, GapLevel::Significant);
        assert_eq!(gap.warning_color, "orange");
        assert!(!gap.is_acceptable());
    }

    #[test]
    fn test_analyze_generous_offer() {
        let gap = analyze(1000.0, 1200.0);
        assert_eq!(gap.dollar_gap, -200);
        assert_eq!(gap.percent_gap, -20);
        assert_eq!(gap.warning_level, GapLevel::Above);
        assert!(gap.is_acceptable());
    }

    #[test]
    fn test_percent_is_rounded_before_classification() {
        // 15.4% rounds to 15, still fair
        assert_eq!(analyze(1000.0, 846.0).percent_gap, 15);
        assert_eq!(analyze(1000.0, 846.0).warning_level, GapLevel::Fair);
        // 15.6% rounds to 16
        assert_eq!(analyze(1000.0, 844.0).warning_level, GapLevel::Below);
        // -15.6% rounds to -16
        assert_eq!(analyze(1000.0, 1156.0).warning_level, GapLevel::Above);
    }

    #[test]
    fn test_compromise_rate() {
        assert_eq!(compromise_rate(1000.0, 500.0), 800);
        assert_eq!(compromise_rate(975.0, 600.0), 825);
        assert_eq!(compromise_rate(1000.0, 1000.0), 1000);
    }
}
