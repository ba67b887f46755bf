//! Creator and deal inputs for rate calculation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Social platform a deliverable is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
        }
    }

    /// Display name used in breakdown labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
        }
    }

    /// Known content types for this platform, with their labels
    pub fn content_types(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Platform::Instagram => &[
                ("reel-short", "Reel (<30s)"),
                ("reel-standard", "Reel (30-60s)"),
                ("reel-long", "Reel (60-90s)"),
                ("story", "Story (single frame)"),
                ("post-static", "Static Post"),
                ("carousel", "Carousel Post"),
            ],
            Platform::Tiktok => &[
                ("video-short", "Video (<30s)"),
                ("video-standard", "Video (30-60s)"),
                ("video-long", "Video (60s+)"),
            ],
            Platform::Youtube => &[
                ("short", "Short"),
                ("integration", "Integration (60-90s mention)"),
                ("video-standard", "Dedicated Video"),
            ],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human label for a platform/content-type pair
///
/// Unknown content types render as `"{Platform} {content_type}"`.
pub fn deliverable_label(platform: Platform, content_type: &str) -> String {
    platform
        .content_types()
        .iter()
        .find(|(key, _)| *key == content_type)
        .map(|(_, label)| format!("{} {}", platform.display_name(), label))
        .unwrap_or_else(|| format!("{} {}", platform.display_name(), content_type))
}

/// Content niche of the creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    Finance,
    B2b,
    Tech,
    Health,
    Fitness,
    Fashion,
    Beauty,
    Lifestyle,
    Gaming,
    Entertainment,
    Food,
    Travel,
    Parenting,
    /// Any niche the engine does not know yet
    #[serde(other)]
    Other,
}

impl Niche {
    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::Finance => "finance",
            Niche::B2b => "b2b",
            Niche::Tech => "tech",
            Niche::Health => "health",
            Niche::Fitness => "fitness",
            Niche::Fashion => "fashion",
            Niche::Beauty => "beauty",
            Niche::Lifestyle => "lifestyle",
            Niche::Gaming => "gaming",
            Niche::Entertainment => "entertainment",
            Niche::Food => "food",
            Niche::Travel => "travel",
            Niche::Parenting => "parenting",
            Niche::Other => "other",
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the brand may use the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageType {
    #[default]
    Organic,
    Paid,
}

impl UsageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageType::Organic => "organic",
            UsageType::Paid => "paid",
        }
    }
}

/// Usage duration in days that means "forever"
pub const PERPETUAL_DAYS: u32 = 9999;

/// A single piece of content the brand is buying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    /// Caller-assigned identity, echoed back in the breakdown
    pub id: String,
    pub platform: Platform,
    /// Platform-scoped content type key, e.g. `reel-standard`
    pub content_type: String,
    pub quantity: u32,
}

impl Deliverable {
    pub fn new(
        id: impl Into<String>,
        platform: Platform,
        content_type: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            platform,
            content_type: content_type.into(),
            quantity,
        }
    }

    /// Composite key used by the platform/content multiplier table
    pub fn table_key(&self) -> String {
        format!("{}-{}", self.platform, self.content_type)
    }

    pub fn label(&self) -> String {
        deliverable_label(self.platform, &self.content_type)
    }
}

/// Everything the calculator needs about the creator and the deal
///
/// `followers` must be positive; the calculator divides by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorInput {
    pub followers: u64,
    /// Engagement rate as a percentage (3.5 means 3.5%)
    pub engagement_rate: f64,
    pub niche: Niche,
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub usage_type: UsageType,
    /// One of 30, 90, 365 or 9999 (perpetual)
    #[serde(default = "default_usage_duration")]
    pub usage_duration: u32,
    #[serde(default)]
    pub has_whitelisting: bool,
    /// One of 0, 30, 60 or 90
    #[serde(default)]
    pub exclusivity_days: u32,
    #[serde(default)]
    pub is_long_term_partnership: bool,
    #[serde(default = "default_true")]
    pub has_payment_terms: bool,
    #[serde(default = "default_revision_rounds")]
    pub revision_rounds: u32,
}

fn default_usage_duration() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

fn default_revision_rounds() -> u32 {
    2
}

impl CreatorInput {
    /// Start an input with default deal terms (organic, 30 days, no extras)
    pub fn new(followers: u64, engagement_rate: f64, niche: Niche) -> Self {
        Self {
            followers,
            engagement_rate,
            niche,
            deliverables: Vec::new(),
            usage_type: UsageType::Organic,
            usage_duration: default_usage_duration(),
            has_whitelisting: false,
            exclusivity_days: 0,
            is_long_term_partnership: false,
            has_payment_terms: true,
            revision_rounds: default_revision_rounds(),
        }
    }

    pub fn with_deliverable(mut self, deliverable: Deliverable) -> Self {
        self.deliverables.push(deliverable);
        self
    }

    pub fn with_usage(mut self, usage_type: UsageType, duration_days: u32) -> Self {
        self.usage_type = usage_type;
        self.usage_duration = duration_days;
        self
    }

    pub fn whitelisting(mut self) -> Self {
        self.has_whitelisting = true;
        self
    }

    pub fn with_exclusivity(mut self, days: u32) -> Self {
        self.exclusivity_days = days;
        self
    }

    pub fn long_term(mut self) -> Self {
        self.is_long_term_partnership = true;
        self
    }

    pub fn payment_terms(mut self, present: bool) -> Self {
        self.has_payment_terms = present;
        self
    }

    pub fn with_revisions(mut self, rounds: u32) -> Self {
        self.revision_rounds = rounds;
        self
    }

    /// Sum of all deliverable quantities
    pub fn total_items(&self) -> u32 {
        self.deliverables.iter().map(|d| d.quantity).sum()
    }
}
