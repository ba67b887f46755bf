//! Audience size and engagement classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audience-size bucket driving the base per-post rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreatorTier {
    /// Under 50K followers (smaller accounts are bucketed here too)
    Micro,
    /// 50K to 100K followers
    MidMicro,
    /// 100K followers and up
    MidTier,
}

impl CreatorTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorTier::Micro => "micro",
            CreatorTier::MidMicro => "mid-micro",
            CreatorTier::MidTier => "mid-tier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreatorTier::Micro => "Micro (10K-50K)",
            CreatorTier::MidMicro => "Mid-Micro (50K-100K)",
            CreatorTier::MidTier => "Mid-Tier (100K+)",
        }
    }
}

impl fmt::Display for CreatorTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative engagement bucket driving the engagement multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl EngagementTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementTier::Excellent => "excellent",
            EngagementTier::Good => "good",
            EngagementTier::Average => "average",
            EngagementTier::Poor => "poor",
        }
    }
}

impl fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a follower count
///
/// Accounts under 10K are not rejected; they fall into `Micro`.
pub fn get_creator_tier(followers: u64) -> CreatorTier {
    match followers {
        0..=49_999 => CreatorTier::Micro,
        50_000..=99_999 => CreatorTier::MidMicro,
        _ => CreatorTier::MidTier,
    }
}

/// Classify an engagement rate given as a percentage
///
/// Lower bounds are inclusive except the top: exactly 5% is `Good`.
pub fn get_engagement_tier(engagement_rate: f64) -> EngagementTier {
    if engagement_rate > 5.0 {
        EngagementTier::Excellent
    } else if engagement_rate >= 3.0 {
        EngagementTier::Good
    } else if engagement_rate >= 2.0 {
        EngagementTier::Average
    } else {
        EngagementTier::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_tier_boundaries() {
        assert_eq!(get_creator_tier(5_000), CreatorTier::Micro);
        assert_eq!(get_creator_tier(10_000), CreatorTier::Micro);
        assert_eq!(get_creator_tier(49_999), CreatorTier::Micro);
        assert_eq!(get_creator_tier(50_000), CreatorTier::MidMicro);
        assert_eq!(get_creator_tier(99_999), CreatorTier::MidMicro);
        assert_eq!(get_creator_tier(100_000), CreatorTier::MidTier);
        assert_eq!(get_creator_tier(2_000_000), CreatorTier::MidTier);
    }

    #[test]
    fn test_engagement_tier_boundaries() {
        assert_eq!(get_engagement_tier(5.1), EngagementTier::Excellent);
        assert_eq!(get_engagement_tier(5.0), EngagementTier::Good);
        assert_eq!(get_engagement_tier(3.0), EngagementTier::Good);
        assert_eq!(get_engagement_tier(2.99), EngagementTier::Average);
        assert_eq!(get_engagement_tier(2.0), EngagementTier::Average);
        assert_eq!(get_engagement_tier(1.99), EngagementTier::Poor);
        assert_eq!(get_engagement_tier(0.0), EngagementTier::Poor);
    }

    #[test]
    fn test_classification_is_stable() {
        for followers in [1, 9_999, 50_000, 150_000] {
            assert_eq!(get_creator_tier(followers), get_creator_tier(followers));
        }
        for rate in [0.5, 2.0, 3.5, 7.2] {
            assert_eq!(get_engagement_tier(rate), get_engagement_tier(rate));
        }
    }

    #[test]
    fn test_tier_serde_names() {
        assert_eq!(CreatorTier::MidMicro.as_str(), "mid-micro");
        assert_eq!(CreatorTier::MidTier.to_string(), "mid-tier");
    }
}
