//! Multiplier tables
//!
//! Every lookup goes through [`RateTables::lookup`], so a key the tables do
//! not know (a new content type, an unlisted niche) prices at `1.0` instead of
//! failing.

use std::collections::HashMap;

use crate::input::{Niche, UsageType};
use crate::tiers::{CreatorTier, EngagementTier};

/// Multiplier applied to anything missing from a table
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Pricing constants for one version of the engine
#[derive(Debug, Clone)]
pub struct RateTables {
    /// Low/high dollars per 1K followers, by tier
    pub rate_per_1k: HashMap<CreatorTier, (f64, f64)>,
    /// Historical package average for three deliverables, by tier
    pub tier_averages: HashMap<CreatorTier, f64>,
    pub engagement: HashMap<EngagementTier, f64>,
    /// Keyed by `"{platform}-{contentType}"`
    pub content: HashMap<String, f64>,
    pub niche: HashMap<Niche, f64>,
    /// Keyed by usage type and duration in days
    pub usage_rights: HashMap<(UsageType, u32), f64>,
    pub whitelisting: f64,
    /// Keyed by exclusivity window in days
    pub exclusivity: HashMap<u32, f64>,
    pub long_term_discount: f64,
    /// `(minimum total items, multiplier)`, highest threshold first
    pub bundle_discounts: Vec<(u32, f64)>,
}

impl Default for RateTables {
    fn default() -> Self {
        let mut rate_per_1k = HashMap::new();
        rate_per_1k.insert(CreatorTier::Micro, (10.0, 15.0));
        rate_per_1k.insert(CreatorTier::MidMicro, (12.0, 18.0));
        rate_per_1k.insert(CreatorTier::MidTier, (15.0, 25.0));

        let mut tier_averages = HashMap::new();
        tier_averages.insert(CreatorTier::Micro, 1_200.0);
        tier_averages.insert(CreatorTier::MidMicro, 2_700.0);
        tier_averages.insert(CreatorTier::MidTier, 12_000.0);

        let mut engagement = HashMap::new();
        engagement.insert(EngagementTier::Excellent, 1.2);
        engagement.insert(EngagementTier::Good, 1.0);
        engagement.insert(EngagementTier::Average, 0.9);
        engagement.insert(EngagementTier::Poor, 0.7);

        let content = [
            ("instagram-reel-short", 1.0),
            ("instagram-reel-standard", 1.3),
            ("instagram-reel-long", 1.7),
            ("instagram-story", 0.3),
            ("instagram-post-static", 0.8),
            ("instagram-carousel", 1.1),
            ("tiktok-video-short", 0.9),
            ("tiktok-video-standard", 1.2),
            ("tiktok-video-long", 1.5),
            ("youtube-short", 0.8),
            ("youtube-integration", 4.0),
            ("youtube-video-standard", 6.0),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        let mut niche = HashMap::new();
        for premium in [Niche::Finance, Niche::B2b, Niche::Tech, Niche::Health] {
            niche.insert(premium, 1.3);
        }
        for standard in [Niche::Fitness, Niche::Fashion, Niche::Beauty, Niche::Lifestyle] {
            niche.insert(standard, 1.0);
        }
        for entertainment in [Niche::Gaming, Niche::Entertainment] {
            niche.insert(entertainment, 0.9);
        }

        let mut usage_rights = HashMap::new();
        usage_rights.insert((UsageType::Organic, 30), 1.0);
        usage_rights.insert((UsageType::Organic, 90), 1.2);
        usage_rights.insert((UsageType::Organic, 365), 1.5);
        usage_rights.insert((UsageType::Organic, 9999), 1.5);
        usage_rights.insert((UsageType::Paid, 30), 1.5);
        usage_rights.insert((UsageType::Paid, 90), 2.0);
        usage_rights.insert((UsageType::Paid, 365), 3.0);
        usage_rights.insert((UsageType::Paid, 9999), 3.0);

        let mut exclusivity = HashMap::new();
        exclusivity.insert(30, 1.15);
        exclusivity.insert(60, 1.3);
        exclusivity.insert(90, 1.5);

        Self {
            rate_per_1k,
            tier_averages,
            engagement,
            content,
            niche,
            usage_rights,
            whitelisting: 1.3,
            exclusivity,
            long_term_discount: 0.8,
            bundle_discounts: vec![
                (5, 0.85), // 5+ items: 15% off
                (3, 0.9),  // 3+ items: 10% off
            ],
        }
    }
}

impl RateTables {
    /// Single default-on-miss lookup shared by every table
    pub fn lookup<K, Q>(table: &HashMap<K, f64>, key: &Q) -> f64
    where
        K: std::borrow::Borrow<Q> + std::hash::Hash + Eq,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        table.get(key).copied().unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Average of the tier's per-1K pair
    pub fn avg_rate_per_1k(&self, tier: CreatorTier) -> f64 {
        self.rate_per_1k
            .get(&tier)
            .map(|(low, high)| (low + high) / 2.0)
            .unwrap_or(0.0)
    }

    pub fn engagement_multiplier(&self, tier: EngagementTier) -> f64 {
        Self::lookup(&self.engagement, &tier)
    }

    pub fn content_multiplier(&self, key: &str) -> f64 {
        Self::lookup(&self.content, key)
    }

    pub fn niche_multiplier(&self, niche: Niche) -> f64 {
        Self::lookup(&self.niche, &niche)
    }

    pub fn usage_multiplier(&self, usage_type: UsageType, duration_days: u32) -> f64 {
        Self::lookup(&self.usage_rights, &(usage_type, duration_days))
    }

    pub fn exclusivity_multiplier(&self, days: u32) -> f64 {
        Self::lookup(&self.exclusivity, &days)
    }

    /// Bundle multiplier and its reason; a long-term partnership wins over volume
    pub fn bundle_multiplier(&self, long_term: bool, total_items: u32) -> (f64, Option<String>) {
        if long_term {
            return (
                self.long_term_discount,
                Some("Long-term partnership discount".to_string()),
            );
        }
        self.bundle_discounts
            .iter()
            .find(|(threshold, _)| total_items >= *threshold)
            .map(|&(threshold, multiplier)| {
                (multiplier, Some(format!("Bundle discount ({}+ items)", threshold)))
            })
            .unwrap_or((DEFAULT_MULTIPLIER, None))
    }

    /// Historical average scaled to a package of `total_items`
    pub fn market_average(&self, tier: CreatorTier, total_items: u32) -> f64 {
        let tier_average = self.tier_averages.get(&tier).copied().unwrap_or(0.0);
        tier_average / 3.0 * total_items as f64
    }
}
