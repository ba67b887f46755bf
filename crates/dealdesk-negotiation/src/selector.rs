//! Negotiation response selection
//!
//! For each strategy, picks the first template matching the objection and
//! stage, or the strategy's fallback, and personalizes it.

use serde::{Deserialize, Serialize};

use crate::input::{NegotiationInput, Strategy};
use crate::personalize::{substitute, unresolved_tokens, TokenValues};
use crate::templates::{Template, TemplateSource};

/// A personalized email draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// One response draft for one strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOption {
    pub strategy: Strategy,
    pub title: String,
    pub subtitle: String,
    pub email: EmailDraft,
    pub when_to_use: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Id of the template the draft came from
    pub template_id: String,
    pub used_fallback: bool,
}

/// First matching template for a strategy, or its fallback
///
/// Panics when the source has no fallback for `strategy`: a library that
/// cannot answer all three strategies is misconfigured.
pub fn select_template<'a, S>(
    input: &NegotiationInput,
    library: &'a S,
    strategy: Strategy,
) -> (&'a Template, bool)
where
    S: TemplateSource + ?Sized,
{
    if let Some(template) = library
        .find(input.objection_type, input.stage, strategy)
        .into_iter()
        .next()
    {
        return (template, false);
    }

    tracing::debug!(
        %strategy,
        objection = %input.objection_type,
        stage = %input.stage,
        "no template matched, using fallback"
    );
    let fallback = library.fallback(strategy).unwrap_or_else(|| {
        panic!(
            "template library has no fallback for strategy '{}'",
            strategy
        )
    });
    (fallback, true)
}

/// Personalize a template for one strategy
pub fn personalize(
    input: &NegotiationInput,
    template: &Template,
    strategy: Strategy,
    used_fallback: bool,
) -> ResponseOption {
    let tokens = TokenValues::for_strategy(input, strategy);
    let subject = substitute(&template.subject, &tokens);
    let body = substitute(&template.body, &tokens);

    let leftover: Vec<String> = unresolved_tokens(&subject)
        .into_iter()
        .chain(unresolved_tokens(&body))
        .collect();
    if !leftover.is_empty() {
        tracing::warn!(
            template = %template.id,
            tokens = ?leftover,
            "personalized response still contains template tokens"
        );
    }

    ResponseOption {
        strategy,
        title: strategy.title().to_string(),
        subtitle: strategy.subtitle().to_string(),
        email: EmailDraft { subject, body },
        when_to_use: template.when_to_use.clone(),
        pros: template.pros.clone(),
        cons: template.cons.clone(),
        template_id: template.id.clone(),
        used_fallback,
    }
}

/// Generate one response per strategy, in firm, scope, compromise order
pub fn generate<S>(input: &NegotiationInput, library: &S) -> [ResponseOption; 3]
where
    S: TemplateSource + ?Sized,
{
    tracing::debug!(
        stage = %input.stage,
        objection = %input.objection_type,
        flexibility = %input.flexibility,
        "generating negotiation responses"
    );

    Strategy::ALL.map(|strategy| {
        let (template, used_fallback) = select_template(input, library, strategy);
        personalize(input, template, strategy, used_fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{NegotiationStage, ObjectionType};

    fn template(id: &str, strategy: Strategy, body: &str) -> Template {
        Template {
            id: id.to_string(),
            objection_types: vec![ObjectionType::BudgetLimited],
            strategy,
            stage: vec![NegotiationStage::AfterCounter],
            subject: format!("{} for {{{{brandName}}}}", id),
            body: body.to_string(),
            when_to_use: format!("when {}", id),
            pros: vec!["pro".to_string()],
            cons: vec!["con".to_string()],
        }
    }

    /// Synthetic source with no fallbacks at all
    struct NoFallbacks(Vec<Template>);

    impl TemplateSource for NoFallbacks {
        fn find(
            &self,
            objection: ObjectionType,
            stage: NegotiationStage,
            strategy: Strategy,
        ) -> Vec<&Template> {
            self.0
                .iter()
                .filter(|t| t.matches(objection, stage, strategy))
                .collect()
        }

        fn fallback(&self, _strategy: Strategy) -> Option<&Template> {
            None
        }
    }

    fn budget_input() -> NegotiationInput {
        NegotiationInput::new(
            NegotiationStage::AfterCounter,
            ObjectionType::BudgetLimited,
            1000.0,
            500.0,
        )
        .with_names("Maya", "Glowco")
    }

    #[test]
    fn test_matched_templates_are_personalized() {
        let source = NoFallbacks(vec![
            template("firm", Strategy::Firm, "Rate {{fairRate}}"),
            template("scope", Strategy::Scope, "Offer {{brandOffer}}"),
            template("compromise", Strategy::Compromise, "Counter {{compromiseRate}}"),
        ]);
        let options = generate(&budget_input(), &source);

        assert_eq!(options[0].email.body, "Rate $1,000");
        assert_eq!(options[1].email.body, "Offer $500");
        assert_eq!(options[2].email.body, "Counter $800");
        assert_eq!(options[0].email.subject, "firm for Glowco");
        assert_eq!(options[2].title, "Meet in the Middle");
        assert_eq!(options[1].when_to_use, "when scope");
        assert!(options.iter().all(|o| !o.used_fallback));
    }

    #[test]
    fn test_first_match_wins() {
        let source = NoFallbacks(vec![
            template("firm-first", Strategy::Firm, "one"),
            template("firm-second", Strategy::Firm, "two"),
        ]);
        let (picked, used_fallback) = select_template(&budget_input(), &source, Strategy::Firm);
        assert_eq!(picked.id, "firm-first");
        assert!(!used_fallback);
    }

    #[test]
    #[should_panic(expected = "no fallback for strategy 'scope'")]
    fn test_missing_fallback_panics() {
        let source = NoFallbacks(vec![template("firm", Strategy::Firm, "Rate {{fairRate}}")]);
        let _ = generate(&budget_input(), &source);
    }
}
