//! Sponsorship rate calculation
//!
//! Computes a per-deliverable rate, folds the package-level modifiers over
//! the subtotal in a fixed order, then checks the final number for anomalies.
//! Every adjustment is recorded in the result's `steps` trail.

use dealdesk_core::{format_currency, round_half_away};

use crate::input::{CreatorInput, UsageType, PERPETUAL_DAYS};
use crate::result::{
    CalculationStep, Confidence, DeliverableBreakdown, MarketPosition, NegotiationAnchors,
    RateResult, RedFlag,
};
use crate::tables::RateTables;
use crate::tiers::{get_creator_tier, get_engagement_tier, EngagementTier};

/// Range around the final package total
const MIN_RATE_FACTOR: f64 = 0.95;
const MAX_RATE_FACTOR: f64 = 1.15;

/// Below this many dollars per 1K followers per item, the deal is underpaid
const MIN_RATE_PER_1K: f64 = 8.0;

/// More items than this for less than `BULK_MIN_TOTAL` is flagged
const BULK_ITEM_LIMIT: u32 = 5;
const BULK_MIN_TOTAL: f64 = 3_000.0;

const STANDARD_REVISION_ROUNDS: u32 = 2;
const LONG_EXCLUSIVITY_DAYS: u32 = 90;

/// Steps and flags collected during a single calculation
#[derive(Debug, Default)]
struct Trail {
    steps: Vec<CalculationStep>,
    red_flags: Vec<RedFlag>,
}

impl Trail {
    fn step(
        &mut self,
        label: impl Into<String>,
        value: f64,
        multiplier: Option<f64>,
        explanation: impl Into<String>,
    ) {
        self.steps.push(CalculationStep {
            label: label.into(),
            value,
            multiplier,
            explanation: explanation.into(),
        });
    }

    /// Multiply the running total; a `1.0` multiplier leaves no step behind
    fn apply(
        &mut self,
        total: f64,
        multiplier: f64,
        label: impl Into<String>,
        explanation: impl Into<String>,
    ) -> f64 {
        if multiplier == 1.0 {
            return total;
        }
        let next = total * multiplier;
        self.step(label, next, Some(multiplier), explanation);
        next
    }

    fn flag(&mut self, flag: RedFlag) {
        self.red_flags.push(flag);
    }
}

/// Rate calculator over a fixed set of pricing tables
#[derive(Debug, Clone, Default)]
pub struct RateCalculator {
    tables: RateTables,
}

impl RateCalculator {
    pub fn new(tables: RateTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Calculate the rate for a creator and a deal
    pub fn calculate(&self, input: &CreatorInput) -> RateResult {
        let mut trail = Trail::default();
        let tables = &self.tables;

        let creator_tier = get_creator_tier(input.followers);
        let engaged_followers =
            (input.followers as f64 * input.engagement_rate / 100.0).floor() as u64;
        let engagement_tier = get_engagement_tier(input.engagement_rate);

        let per_1k = tables.avg_rate_per_1k(creator_tier);
        let base_rate = input.followers as f64 / 1000.0 * per_1k;
        trail.step(
            "Base rate",
            base_rate,
            None,
            format!(
                "{:.1}K followers x ${} per 1K ({})",
                input.followers as f64 / 1000.0,
                per_1k,
                creator_tier.label()
            ),
        );

        // Per-deliverable pricing
        let engagement_multiplier = tables.engagement_multiplier(engagement_tier);
        if engagement_tier == EngagementTier::Poor {
            trail.flag(RedFlag::warning(
                format!(
                    "Low engagement rate detected ({}%)",
                    input.engagement_rate
                ),
                "Brands may negotiate harder; lead with audience quality and past campaign results",
            ));
        }
        let niche_multiplier = tables.niche_multiplier(input.niche);

        let mut breakdowns = Vec::with_capacity(input.deliverables.len());
        let mut subtotal = 0.0;
        for deliverable in &input.deliverables {
            let content_multiplier = tables.content_multiplier(&deliverable.table_key());
            let combined = engagement_multiplier * content_multiplier * niche_multiplier;
            let rate = base_rate * engagement_multiplier * content_multiplier * niche_multiplier;
            let item_subtotal = rate * deliverable.quantity as f64;
            subtotal += item_subtotal;

            let label = deliverable.label();
            trail.step(
                format!("{} x {}", label, deliverable.quantity),
                subtotal,
                Some(combined),
                format!(
                    "engagement x{} ({}), format x{}, niche x{} ({}) = {} per item",
                    engagement_multiplier,
                    engagement_tier,
                    content_multiplier,
                    niche_multiplier,
                    input.niche,
                    format_currency(rate)
                ),
            );

            breakdowns.push(DeliverableBreakdown {
                deliverable_id: deliverable.id.clone(),
                label,
                quantity: deliverable.quantity,
                rate,
                subtotal: item_subtotal,
            });
        }

        let total_items = input.total_items();
        trail.step(
            "Package subtotal",
            subtotal,
            None,
            format!(
                "{} deliverable type(s), {} item(s) in total",
                input.deliverables.len(),
                total_items
            ),
        );

        // Package-level modifiers, in order
        let mut total = subtotal;

        let usage_multiplier = tables.usage_multiplier(input.usage_type, input.usage_duration);
        total = trail.apply(
            total,
            usage_multiplier,
            "Usage rights",
            describe_usage(input.usage_type, input.usage_duration),
        );
        if input.usage_type == UsageType::Paid && input.usage_duration == PERPETUAL_DAYS {
            trail.flag(RedFlag::danger(
                "Perpetual usage rights requested for paid ads",
                "Limit paid usage to 90 days or charge at least 3x your organic rate",
            ));
        }

        if input.has_whitelisting {
            total = trail.apply(
                total,
                tables.whitelisting,
                "Whitelisting",
                "Brand runs ads through your account",
            );
        }

        total = trail.apply(
            total,
            tables.exclusivity_multiplier(input.exclusivity_days),
            "Exclusivity",
            format!(
                "No competing brands for {} days",
                input.exclusivity_days
            ),
        );
        if input.exclusivity_days >= LONG_EXCLUSIVITY_DAYS {
            trail.flag(RedFlag::warning(
                format!("Long exclusivity period ({} days)", input.exclusivity_days),
                "Negotiate down to 30 days or narrow the exclusivity to direct competitors",
            ));
        }

        let (bundle_multiplier, bundle_reason) =
            tables.bundle_multiplier(input.is_long_term_partnership, total_items);
        if let Some(reason) = bundle_reason {
            total = trail.apply(
                total,
                bundle_multiplier,
                "Bundle discount",
                format!("{} on {} item(s)", reason, total_items),
            );
        }

        // Anomaly checks against the final total
        let per_item_per_1k = (total / total_items as f64 / input.followers as f64) * 1000.0;
        if per_item_per_1k < MIN_RATE_PER_1K {
            trail.flag(RedFlag::danger(
                format!(
                    "Rate works out to ${:.2} per 1K followers per deliverable",
                    per_item_per_1k
                ),
                "The industry floor is around $8 per 1K followers; counter higher or cut deliverables",
            ));
        }
        if total_items > BULK_ITEM_LIMIT && total < BULK_MIN_TOTAL {
            trail.flag(RedFlag::danger(
                format!(
                    "{} deliverables for {} is too much work for the money",
                    total_items,
                    format_currency(total)
                ),
                "Reduce the number of deliverables or raise the budget",
            ));
        }
        if !input.has_payment_terms {
            trail.flag(RedFlag::warning(
                "No payment terms specified",
                "Ask for Net 30 terms in writing, with a deposit upfront for new brands",
            ));
        }
        if input.revision_rounds > STANDARD_REVISION_ROUNDS {
            trail.flag(RedFlag::warning(
                format!("{} revision rounds requested", input.revision_rounds),
                "Two rounds is standard; charge for each additional round",
            ));
        }

        let confidence = Confidence::from_flag_count(trail.red_flags.len());

        let min_rate = round_half_away(total * MIN_RATE_FACTOR);
        let max_rate = round_half_away(total * MAX_RATE_FACTOR);
        let recommended_rate = round_half_away(total);

        let negotiation = build_anchors(max_rate, recommended_rate, min_rate);

        let market_average = tables.market_average(creator_tier, total_items);
        let percent_diff = (recommended_rate as f64 - market_average) / market_average * 100.0;
        let market_position = MarketPosition::from_percent_diff(percent_diff);

        tracing::debug!(
            tier = %creator_tier,
            engagement = %engagement_tier,
            total,
            red_flags = trail.red_flags.len(),
            "rate calculated"
        );

        RateResult {
            min_rate,
            max_rate,
            recommended_rate,
            confidence,
            base_rate: round_half_away(base_rate),
            engaged_followers,
            deliverable_breakdowns: breakdowns,
            steps: trail.steps,
            creator_tier,
            engagement_tier,
            market_position,
            red_flags: trail.red_flags,
            negotiation,
        }
    }
}

fn describe_usage(usage_type: UsageType, duration_days: u32) -> String {
    let usage = match usage_type {
        UsageType::Organic => "Organic",
        UsageType::Paid => "Paid",
    };
    if duration_days == PERPETUAL_DAYS {
        format!("{} usage in perpetuity", usage)
    } else {
        format!("{} usage for {} days", usage, duration_days)
    }
}

/// Opening ask is the top of the range; the recommended rate is the floor to accept
fn build_anchors(opening_ask: i64, acceptable_min: i64, walk_away_point: i64) -> NegotiationAnchors {
    let open = format_currency(opening_ask as f64);
    let fair = format_currency(acceptable_min as f64);
    let walk = format_currency(walk_away_point as f64);

    let talking_points = vec![
        format!("Open at {} to leave room for the brand to negotiate", open),
        format!(
            "{} is your fair rate for this package; accept anything at or above it",
            fair
        ),
        format!("Below {} the deal undervalues your work; be ready to walk away", walk),
        format!(
            "If they push back on {}, trade scope (fewer deliverables, shorter usage) before lowering the rate",
            open
        ),
        format!(
            "Your rate between {} and {} reflects engaged followers, not just follower count",
            walk, open
        ),
    ];

    NegotiationAnchors {
        opening_ask,
        acceptable_min,
        walk_away_point,
        talking_points,
    }
}

/// Calculate with the default pricing tables
pub fn calculate_rate(input: &CreatorInput) -> RateResult {
    RateCalculator::default().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Deliverable, Niche, Platform};
    use crate::result::FlagSeverity;
    use crate::tiers::CreatorTier;

    fn reel_input() -> CreatorInput {
        CreatorInput::new(50_000, 3.5, Niche::Lifestyle).with_deliverable(Deliverable::new(
            "d1",
            Platform::Instagram,
            "reel-standard",
            1,
        ))
    }

    #[test]
    fn test_single_reel() {
        let result = calculate_rate(&reel_input());
        assert_eq!(result.creator_tier, CreatorTier::MidMicro);
        assert_eq!(result.engagement_tier, EngagementTier::Good);
        assert_eq!(result.engaged_followers, 1_750);
        assert_eq!(result.base_rate, 750);
        assert_eq!(result.recommended_rate, 975);
        assert_eq!(result.min_rate, 926);
        assert_eq!(result.max_rate, 1_121);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.red_flags.is_empty());
    }

    #[test]
    fn test_neutral_modifiers_leave_no_steps() {
        let result = calculate_rate(&reel_input());
        let labels: Vec<&str> = result.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Base rate", "Instagram Reel (30-60s) x 1", "Package subtotal"]
        );
    }

    #[test]
    fn test_modifier_order() {
        let input = reel_input()
            .with_usage(UsageType::Paid, 90)
            .whitelisting()
            .with_exclusivity(30)
            .long_term();
        let result = calculate_rate(&input);

        let labels: Vec<&str> = result.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            &labels[3..],
            &["Usage rights", "Whitelisting", "Exclusivity", "Bundle discount"]
        );

        // 975 x 2.0 x 1.3 x 1.15 x 0.8
        let expected = 975.0 * 2.0 * 1.3 * 1.15 * 0.8;
        let last = result.steps.last().unwrap();
        assert!((last.value - expected).abs() < 1e-6);
        assert_eq!(result.recommended_rate, round_half_away(expected));
    }

    #[test]
    fn test_long_term_beats_volume_discount() {
        let input = CreatorInput::new(50_000, 3.5, Niche::Lifestyle)
            .with_deliverable(Deliverable::new("d1", Platform::Instagram, "story", 6))
            .long_term();
        let result = calculate_rate(&input);
        let bundle = result
            .steps
            .iter()
            .find(|s| s.label == "Bundle discount")
            .unwrap();
        assert_eq!(bundle.multiplier, Some(0.8));
    }

    #[test]
    fn test_underpaid_per_1k_flag() {
        // 200K followers, six stories: 200 x 20 x 0.3 = 1,200 per story, 7,200 total,
        // x 0.85 bundle = 6,120 -> 5.1 per 1K per item
        let input = CreatorInput::new(200_000, 3.5, Niche::Lifestyle)
            .with_deliverable(Deliverable::new("d1", Platform::Instagram, "story", 6));
        let result = calculate_rate(&input);
        let danger: Vec<&RedFlag> = result.flags_with(FlagSeverity::Danger).collect();
        assert_eq!(danger.len(), 1);
        assert!(danger[0].message.contains("$5.10 per 1K"));
    }

    #[test]
    fn test_too_many_deliverables_flag() {
        let input = CreatorInput::new(12_000, 3.5, Niche::Gaming)
            .with_deliverable(Deliverable::new("d1", Platform::Tiktok, "video-short", 6));
        let result = calculate_rate(&input);
        assert!(result
            .red_flags
            .iter()
            .any(|f| f.severity == FlagSeverity::Danger && f.message.contains("too much work")));
        assert!(result.has_danger_flags());
    }

    #[test]
    fn test_contract_term_flags() {
        let input = reel_input().payment_terms(false).with_revisions(3).with_exclusivity(90);
        let result = calculate_rate(&input);
        let messages: Vec<&str> = result.red_flags.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Long exclusivity period (90 days)",
                "No payment terms specified",
                "3 revision rounds requested",
            ]
        );
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_unknown_content_type_prices_at_base() {
        let input = CreatorInput::new(50_000, 3.5, Niche::Other)
            .with_deliverable(Deliverable::new("d1", Platform::Tiktok, "live-stream", 1));
        let result = calculate_rate(&input);
        assert_eq!(result.deliverable_breakdowns[0].rate, 750.0);
        assert_eq!(result.deliverable_breakdowns[0].label, "TikTok live-stream");
    }

    #[test]
    fn test_talking_points_use_anchors() {
        let result = calculate_rate(&reel_input());
        let anchors = &result.negotiation;
        assert_eq!(anchors.opening_ask, result.max_rate);
        assert_eq!(anchors.acceptable_min, result.recommended_rate);
        assert_eq!(anchors.walk_away_point, result.min_rate);
        assert_eq!(anchors.talking_points.len(), 5);
        assert!(anchors.talking_points[0].contains("$1,121"));
        assert!(anchors.talking_points[1].contains("$975"));
        assert!(anchors.talking_points[2].contains("$926"));
    }

    #[test]
    fn test_breakdown_does_not_touch_input() {
        let input = reel_input();
        let before = input.clone();
        let _ = calculate_rate(&input);
        assert_eq!(input, before);
    }
}
