//! Token substitution for response templates
//!
//! Templates carry fixed `{{token}}` markers. Substitution is a single
//! left-to-right pass: each known marker is replaced by its value, anything
//! else (including text inside substituted values) is left byte-for-byte.

use std::collections::HashMap;

use dealdesk_core::{format_currency, round_half_away};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::gap::{compromise_rate, raw_percent_gap};
use crate::input::{NegotiationInput, Strategy};

pub const BRAND_PLACEHOLDER: &str = "[Brand Name]";
pub const CREATOR_PLACEHOLDER: &str = "[Your Name]";

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());
static LOOSE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap());

/// Values for every token a template may use
#[derive(Debug, Clone, Default)]
pub struct TokenValues {
    values: HashMap<&'static str, String>,
}

impl TokenValues {
    /// Build the token set for one strategy
    ///
    /// `compromiseRate` is only provided to compromise templates.
    pub fn for_strategy(input: &NegotiationInput, strategy: Strategy) -> Self {
        let mut values = HashMap::new();
        values.insert("brandName", name_or(&input.brand_name, BRAND_PLACEHOLDER));
        values.insert("creatorName", name_or(&input.creator_name, CREATOR_PLACEHOLDER));
        values.insert("fairRate", format_currency(input.fair_rate));
        values.insert("brandOffer", format_currency(input.brand_offer));
        values.insert("deliverables", input.deliverables.clone());
        values.insert("usageRights", input.usage_rights.clone());
        values.insert("exclusivity", input.exclusivity.clone());
        values.insert("gap", format_currency(input.fair_rate - input.brand_offer));
        values.insert(
            "gapPercent",
            round_half_away(raw_percent_gap(input.fair_rate, input.brand_offer)).to_string(),
        );
        if strategy == Strategy::Compromise {
            values.insert(
                "compromiseRate",
                format_currency(compromise_rate(input.fair_rate, input.brand_offer) as f64),
            );
        }
        Self { values }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn set(&mut self, token: &'static str, value: impl Into<String>) {
        self.values.insert(token, value.into());
    }
}

fn name_or(name: &Option<String>, placeholder: &str) -> String {
    match name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Replace every known `{{token}}` in `text`
pub fn substitute(text: &str, tokens: &TokenValues) -> String {
    TOKEN
        .replace_all(text, |caps: &Captures| match tokens.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of `{{token}}` markers still present in `text`
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    LOOSE_TOKEN
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
