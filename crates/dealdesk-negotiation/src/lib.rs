//! DealDesk Negotiation: gap analysis and response drafting
//!
//! Once a brand comes back with a counter-offer, this crate measures the gap
//! to the creator's fair rate and drafts three replies (firm, scope,
//! compromise) from an authored template library.
//!
//! # Example
//!
//! ```
//! use dealdesk_negotiation::{
//!     analyze, generate_default, GapLevel, NegotiationInput, NegotiationStage, ObjectionType,
//!     Strategy,
//! };
//!
//! let gap = analyze(1000.0, 600.0);
//! assert_eq!(gap.warning_level, GapLevel::Significant);
//!
//! let input = NegotiationInput::new(
//!     NegotiationStage::AfterCounter,
//!     ObjectionType::BudgetLimited,
//!     1000.0,
//!     600.0,
//! )
//! .with_names("Maya", "Glowco")
//! .with_terms("2 Instagram Reels", "30 days organic", "none");
//!
//! let options = generate_default(&input);
//! assert_eq!(options[2].strategy, Strategy::Compromise);
//! println!("{}\n\n{}", options[0].email.subject, options[0].email.body);
//! ```

pub mod gap;
pub mod input;
pub mod personalize;
pub mod selector;
pub mod templates;

pub use gap::{analyze, compromise_rate, GapAssessment, GapLevel};
pub use input::{Flexibility, NegotiationInput, NegotiationStage, ObjectionType, Strategy};
pub use personalize::{substitute, unresolved_tokens, TokenValues};
pub use selector::{generate, personalize, select_template, EmailDraft, ResponseOption};
pub use templates::{default_library, Template, TemplateLibrary, TemplateSource, TEMPLATES_PATH_ENV};

pub use dealdesk_core::DealDeskError;

/// Generate responses from the embedded template library
pub fn generate_default(input: &NegotiationInput) -> [ResponseOption; 3] {
    generate(input, default_library())
}
