//! Negotiation context supplied by the caller

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the conversation with the brand currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegotiationStage {
    InitialOffer,
    AfterCounter,
    Objection,
    Stalled,
}

impl NegotiationStage {
    pub const ALL: [NegotiationStage; 4] = [
        NegotiationStage::InitialOffer,
        NegotiationStage::AfterCounter,
        NegotiationStage::Objection,
        NegotiationStage::Stalled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NegotiationStage::InitialOffer => "initial-offer",
            NegotiationStage::AfterCounter => "after-counter",
            NegotiationStage::Objection => "objection",
            NegotiationStage::Stalled => "stalled",
        }
    }
}

impl fmt::Display for NegotiationStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the brand is pushing back on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectionType {
    NoObjection,
    BudgetLimited,
    RateTooHigh,
    CompetitorRates,
    UsageRights,
    Exclusivity,
    Timeline,
    Other,
}

impl ObjectionType {
    pub const ALL: [ObjectionType; 8] = [
        ObjectionType::NoObjection,
        ObjectionType::BudgetLimited,
        ObjectionType::RateTooHigh,
        ObjectionType::CompetitorRates,
        ObjectionType::UsageRights,
        ObjectionType::Exclusivity,
        ObjectionType::Timeline,
        ObjectionType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectionType::NoObjection => "no-objection",
            ObjectionType::BudgetLimited => "budget-limited",
            ObjectionType::RateTooHigh => "rate-too-high",
            ObjectionType::CompetitorRates => "competitor-rates",
            ObjectionType::UsageRights => "usage-rights",
            ObjectionType::Exclusivity => "exclusivity",
            ObjectionType::Timeline => "timeline",
            ObjectionType::Other => "other",
        }
    }
}

impl fmt::Display for ObjectionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much room the creator says they have; not used for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flexibility {
    Firm,
    #[default]
    Moderate,
    Flexible,
}

impl fmt::Display for Flexibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Flexibility::Firm => write!(f, "firm"),
            Flexibility::Moderate => write!(f, "moderate"),
            Flexibility::Flexible => write!(f, "flexible"),
        }
    }
}

/// Posture of a response draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Firm,
    Scope,
    Compromise,
}

impl Strategy {
    /// Output order of `generate`
    pub const ALL: [Strategy; 3] = [Strategy::Firm, Strategy::Scope, Strategy::Compromise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Firm => "firm",
            Strategy::Scope => "scope",
            Strategy::Compromise => "compromise",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Firm => "Hold Your Rate",
            Strategy::Scope => "Adjust the Scope",
            Strategy::Compromise => "Meet in the Middle",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Strategy::Firm => "Stand behind your value and explain it",
            Strategy::Scope => "Fit the deliverables to their budget",
            Strategy::Compromise => "Counter at a rate between their offer and yours",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A counter-offer and the context needed to answer it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationInput {
    pub stage: NegotiationStage,
    pub fair_rate: f64,
    pub brand_offer: f64,
    /// Free-text descriptions, substituted verbatim
    #[serde(default)]
    pub deliverables: String,
    #[serde(default)]
    pub usage_rights: String,
    #[serde(default)]
    pub exclusivity: String,
    pub objection_type: ObjectionType,
    #[serde(default)]
    pub custom_objection: Option<String>,
    #[serde(default)]
    pub flexibility: Flexibility,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
}

impl NegotiationInput {
    pub fn new(
        stage: NegotiationStage,
        objection_type: ObjectionType,
        fair_rate: f64,
        brand_offer: f64,
    ) -> Self {
        Self {
            stage,
            fair_rate,
            brand_offer,
            deliverables: String::new(),
            usage_rights: String::new(),
            exclusivity: String::new(),
            objection_type,
            custom_objection: None,
            flexibility: Flexibility::default(),
            creator_name: None,
            brand_name: None,
        }
    }

    pub fn with_terms(
        mut self,
        deliverables: impl Into<String>,
        usage_rights: impl Into<String>,
        exclusivity: impl Into<String>,
    ) -> Self {
        self.deliverables = deliverables.into();
        self.usage_rights = usage_rights.into();
        self.exclusivity = exclusivity.into();
        self
    }

    pub fn with_names(mut self, creator: impl Into<String>, brand: impl Into<String>) -> Self {
        self.creator_name = Some(creator.into());
        self.brand_name = Some(brand.into());
        self
    }

    pub fn with_flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = flexibility;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_order() {
        assert_eq!(
            Strategy::ALL,
            [Strategy::Firm, Strategy::Scope, Strategy::Compromise]
        );
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(NegotiationStage::AfterCounter.to_string(), "after-counter");
        assert_eq!(ObjectionType::NoObjection.to_string(), "no-objection");
        assert_eq!(ObjectionType::ALL.len(), 8);
    }
}
