use crate::error::RuleError;
use crate::policy::Rule;
use crate::rules;
use lazy_static::lazy_static;
use std::collections::BTreeMap;
use tracing::debug;

lazy_static! {
    static ref REGISTRY: RuleRegistry =
        RuleRegistry::builtin().expect("built-in rule keys must be unique");
}

/// Process-wide registry of built-in rules.
///
/// Initialized on first use and read-only afterwards.
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}

/// Rules keyed by their stable rule key, populated by explicit `register` calls.
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<&'static str, Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every rule compiled into this build.
    pub fn builtin() -> Result<Self, RuleError> {
        let mut registry = Self::new();
        rules::register_builtin(&mut registry)?;
        Ok(registry)
    }

    pub fn register<R: Rule + 'static>(&mut self, rule: R) -> Result<(), RuleError> {
        let key = rule.key();
        if self.rules.contains_key(key) {
            return Err(RuleError::DuplicateRule {
                key: key.to_string(),
            });
        }
        debug!(rule_key = key, "registered rule");
        self.rules.insert(key, Box::new(rule));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&dyn Rule> {
        self.rules.get(key).map(|r| r.as_ref())
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Registered rules in key order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules.values().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExecutionContext, ResourceAttributes, RunParameters};
    use crate::policy::RuleMeta;
    use cloudrules_types::{Category, EvaluationResult, Severity};

    static ALWAYS_PASS_META: RuleMeta = RuleMeta {
        key: "check-always-pass",
        description: "Passes every resource",
        severity: Severity::Low,
        category: Category::Governance,
    };

    struct AlwaysPass;

    impl Rule for AlwaysPass {
        fn meta(&self) -> &'static RuleMeta {
            &ALWAYS_PASS_META
        }

        fn evaluate(
            &self,
            _ctx: &ExecutionContext,
            _params: &RunParameters,
            _attributes: Option<&ResourceAttributes>,
        ) -> Result<EvaluationResult, RuleError> {
            Ok(EvaluationResult::success())
        }

        fn help_text(&self) -> &'static str {
            "Always passes."
        }
    }

    #[test]
    fn register_rejects_duplicate_keys() {
        let mut registry = RuleRegistry::new();
        registry.register(AlwaysPass).unwrap();
        let err = registry.register(AlwaysPass).unwrap_err();
        assert_eq!(
            err,
            RuleError::DuplicateRule {
                key: "check-always-pass".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_by_key() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());
        registry.register(AlwaysPass).unwrap();
        let rule = registry.get("check-always-pass").unwrap();
        assert_eq!(rule.help_text(), "Always passes.");
        assert!(registry.get("check-missing").is_none());
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["check-always-pass"]);
    }

    #[test]
    fn builtin_registry_builds() {
        let registry = RuleRegistry::builtin().unwrap();
        assert_eq!(registry.len(), super::registry().len());
    }

    #[cfg(feature = "rule-cloudtrail-log-file-validation")]
    #[test]
    fn builtin_registry_contains_cloudtrail_rule() {
        let rule = registry()
            .get(cloudrules_types::ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION)
            .unwrap();
        assert_eq!(rule.meta().severity, Severity::Medium);
        assert_eq!(rule.meta().category, Category::Security);
    }
}
