//! Rate calculation output
//!
//! A [`RateResult`] is built once per call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tiers::{CreatorTier, EngagementTier};

/// How much to trust the recommended rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Zero flags is high, one or two is medium, three or more is low
    pub fn from_flag_count(count: usize) -> Self {
        match count {
            0 => Confidence::High,
            1..=2 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Severity of a red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    Warning,
    Danger,
}

/// A deal-term anomaly surfaced to the creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedFlag {
    pub severity: FlagSeverity,
    pub message: String,
    pub suggestion: String,
}

impl RedFlag {
    pub fn warning(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: FlagSeverity::Warning,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn danger(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: FlagSeverity::Danger,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// One entry of the "how we calculated this" trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    pub label: String,
    /// Running value after this step, full precision
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    pub explanation: String,
}

/// Pricing of a single input deliverable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableBreakdown {
    pub deliverable_id: String,
    pub label: String,
    pub quantity: u32,
    /// Per-item rate after engagement, format and niche multipliers
    pub rate: f64,
    pub subtotal: f64,
}

/// How the recommended rate compares with the tier's historical average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPosition {
    #[serde(rename = "significantly above average")]
    SignificantlyAboveAverage,
    #[serde(rename = "above average")]
    AboveAverage,
    #[serde(rename = "average")]
    Average,
    #[serde(rename = "below average")]
    BelowAverage,
    #[serde(rename = "significantly below average")]
    SignificantlyBelowAverage,
}

impl MarketPosition {
    /// Classify a percent difference from the market average
    pub fn from_percent_diff(diff: f64) -> Self {
        if diff > 30.0 {
            MarketPosition::SignificantlyAboveAverage
        } else if diff > 10.0 {
            MarketPosition::AboveAverage
        } else if diff >= -10.0 {
            MarketPosition::Average
        } else if diff > -30.0 {
            MarketPosition::BelowAverage
        } else {
            MarketPosition::SignificantlyBelowAverage
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPosition::SignificantlyAboveAverage => "significantly above average",
            MarketPosition::AboveAverage => "above average",
            MarketPosition::Average => "average",
            MarketPosition::BelowAverage => "below average",
            MarketPosition::SignificantlyBelowAverage => "significantly below average",
        }
    }
}

impl fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anchors for scripting a negotiation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationAnchors {
    pub opening_ask: i64,
    pub acceptable_min: i64,
    pub walk_away_point: i64,
    pub talking_points: Vec<String>,
}

/// Full result of a rate calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResult {
    pub min_rate: i64,
    pub max_rate: i64,
    pub recommended_rate: i64,
    pub confidence: Confidence,
    /// Per-post rate before any multiplier
    pub base_rate: i64,
    pub engaged_followers: u64,
    pub deliverable_breakdowns: Vec<DeliverableBreakdown>,
    pub steps: Vec<CalculationStep>,
    pub creator_tier: CreatorTier,
    pub engagement_tier: EngagementTier,
    pub market_position: MarketPosition,
    pub red_flags: Vec<RedFlag>,
    pub negotiation: NegotiationAnchors,
}

impl RateResult {
    pub fn has_danger_flags(&self) -> bool {
        self.red_flags
            .iter()
            .any(|f| f.severity == FlagSeverity::Danger)
    }

    pub fn flags_with(&self, severity: FlagSeverity) -> impl Iterator<Item = &RedFlag> {
        self.red_flags.iter().filter(move |f| f.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_from_flags() {
        assert_eq!(Confidence::from_flag_count(0), Confidence::High);
        assert_eq!(Confidence::from_flag_count(1), Confidence::Medium);
        assert_eq!(Confidence::from_flag_count(2), Confidence::Medium);
        assert_eq!(Confidence::from_flag_count(3), Confidence::Low);
        assert_eq!(Confidence::from_flag_count(7), Confidence::Low);
    }

    #[test]
    fn test_market_position_bands() {
        assert_eq!(
            MarketPosition::from_percent_diff(31.0),
            MarketPosition::SignificantlyAboveAverage
        );
        assert_eq!(MarketPosition::from_percent_diff(30.0), MarketPosition::AboveAverage);
        assert_eq!(MarketPosition::from_percent_diff(10.0), MarketPosition::Average);
        assert_eq!(MarketPosition::from_percent_diff(-10.0), MarketPosition::Average);
        assert_eq!(MarketPosition::from_percent_diff(-10.5), MarketPosition::BelowAverage);
        assert_eq!(
            MarketPosition::from_percent_diff(-30.0),
            MarketPosition::SignificantlyBelowAverage
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(FlagSeverity::Danger > FlagSeverity::Warning);
    }
}
