//! The `list` use case: enumerate registered rules.

use cloudrules_domain::registry;
use cloudrules_types::{Category, Severity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSummary {
    pub key: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub category: Category,
}

/// Registered rules in key order.
pub fn run_list() -> Vec<RuleSummary> {
    registry()
        .iter()
        .map(|rule| {
            let meta = rule.meta();
            RuleSummary {
                key: meta.key,
                description: meta.description,
                severity: meta.severity,
                category: meta.category,
            }
        })
        .collect()
}

/// One line per rule: key, default severity, default category, description.
pub fn format_rule_list(rules: &[RuleSummary]) -> String {
    let width = rules.iter().map(|r| r.key.len()).max().unwrap_or(0);
    let mut out = String::new();
    for rule in rules {
        out.push_str(&format!(
            "{:<width$}  {:<8}  {:<16}  {}\n",
            rule.key,
            rule.severity.as_str(),
            rule.category.as_str(),
            rule.description,
        ));
    }
    out
}
