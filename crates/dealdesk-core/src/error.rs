//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealDeskError {
    #[error("TEMPLATE/READ: {path}: {message}")]
    TemplateRead { path: String, message: String },

    #[error("TEMPLATE/PARSE: {0}")]
    TemplateParse(String),

    #[error("TEMPLATE/FALLBACK: no fallback template for strategy '{0}'")]
    MissingFallback(String),

    #[error("TEMPLATE/INVALID: {id}: {reason}")]
    InvalidTemplate { id: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_categories() {
        let err = DealDeskError::MissingFallback("scope".to_string());
        assert_eq!(
            err.to_string(),
            "TEMPLATE/FALLBACK: no fallback template for strategy 'scope'"
        );

        let err = DealDeskError::InvalidTemplate {
            id: "budget-firm".to_string(),
            reason: "empty stage set".to_string(),
        };
        assert!(err.to_string().starts_with("TEMPLATE/INVALID"));
    }
}
