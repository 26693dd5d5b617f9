use cloudrules_types::ids;
use thiserror::Error;

/// Reasons a rule could not produce a result.
///
/// A policy violation is not one of these: it is a `Failure` result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("MISSING_CONFIGURATION: rule '{rule_key}' requires non-empty run parameters: {missing}")]
    MissingConfiguration { rule_key: String, missing: String },

    #[error("UNKNOWN_RULE: no rule registered under key '{key}'")]
    UnknownRule { key: String },

    #[error("DUPLICATE_RULE: a rule is already registered under key '{key}'")]
    DuplicateRule { key: String },
}

impl RuleError {
    /// Stable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::MissingConfiguration { .. } => ids::CODE_MISSING_CONFIGURATION,
            RuleError::UnknownRule { .. } => ids::CODE_UNKNOWN_RULE,
            RuleError::DuplicateRule { .. } => ids::CODE_DUPLICATE_RULE,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, RuleError::MissingConfiguration { .. })
    }
}
