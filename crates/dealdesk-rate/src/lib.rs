//! DealDesk Rate: sponsorship rate calculation
//!
//! Turns a creator's audience, content and deal terms into a recommended
//! rate with a full audit trail, red flags and negotiation anchors.
//!
//! # Architecture
//!
//! ```text
//! followers ──► CreatorTier ──► base rate
//!                                   │
//! deliverables ─► engagement x format x niche ─► per-item rate x quantity
//!                                   │
//!                             package subtotal
//!                                   │
//!        usage rights ─► whitelisting ─► exclusivity ─► bundle discount
//!                                   │
//!                   anomaly checks ─► confidence ─► range ─► anchors
//! ```
//!
//! # Example
//!
//! ```
//! use dealdesk_rate::{calculate, CreatorInput, Deliverable, Niche, Platform};
//!
//! let input = CreatorInput::new(50_000, 3.5, Niche::Lifestyle)
//!     .with_deliverable(Deliverable::new("reel-1", Platform::Instagram, "reel-standard", 1));
//!
//! let result = calculate(&input);
//! assert_eq!(result.recommended_rate, 975);
//!
//! for step in &result.steps {
//!     println!("{}: {:.2} ({})", step.label, step.value, step.explanation);
//! }
//! ```

pub mod calculator;
pub mod input;
pub mod result;
pub mod tables;
pub mod tiers;

use once_cell::sync::Lazy;

pub use calculator::{calculate_rate, RateCalculator};
pub use input::{
    deliverable_label, CreatorInput, Deliverable, Niche, Platform, UsageType, PERPETUAL_DAYS,
};
pub use result::{
    CalculationStep, Confidence, DeliverableBreakdown, FlagSeverity, MarketPosition,
    NegotiationAnchors, RateResult, RedFlag,
};
pub use tables::{RateTables, DEFAULT_MULTIPLIER};
pub use tiers::{get_creator_tier, get_engagement_tier, CreatorTier, EngagementTier};

static DEFAULT_CALCULATOR: Lazy<RateCalculator> = Lazy::new(RateCalculator::default);

/// Calculate a rate with the built-in pricing tables
///
/// Shares one table set across calls and threads.
pub fn calculate(input: &CreatorInput) -> RateResult {
    DEFAULT_CALCULATOR.calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_matches_fresh_calculator() {
        let input = CreatorInput::new(120_000, 6.0, Niche::Finance)
            .with_deliverable(Deliverable::new("yt", Platform::Youtube, "integration", 1));
        assert_eq!(calculate(&input), calculate_rate(&input));
    }

    #[test]
    fn test_calculate_from_json() {
        let input: CreatorInput = serde_json::from_str(
            r#"{
                "followers": 80000,
                "engagementRate": 4.2,
                "niche": "fitness",
                "deliverables": [
                    { "id": "a", "platform": "tiktok", "contentType": "video-standard", "quantity": 2 }
                ],
                "usageType": "paid",
                "usageDuration": 90
            }"#,
        )
        .unwrap();

        assert!(input.has_payment_terms);
        assert_eq!(input.revision_rounds, 2);

        let result = calculate(&input);
        assert_eq!(result.creator_tier, CreatorTier::MidMicro);
        assert_eq!(result.deliverable_breakdowns.len(), 1);
        assert!(result.steps.iter().any(|s| s.label == "Usage rights"));
    }

    #[test]
    fn test_unknown_niche_deserializes() {
        let niche: Niche = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(niche, Niche::Other);
    }
}
