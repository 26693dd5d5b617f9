use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `cloudrules.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CloudRulesConfigV1 {
    /// Optional schema string for tooling (`cloudrules.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of rule key -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl CloudRulesConfigV1 {
    /// Whether `rule_key` is enabled. Rules without an explicit `enabled` are on.
    pub fn rule_enabled(&self, rule_key: &str) -> bool {
        self.rules
            .get(rule_key)
            .and_then(|c| c.enabled)
            .unwrap_or(true)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Disable a rule without removing its config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override the rule's default severity: `low`, `medium`, `high`, `critical`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Override the rule's default category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
