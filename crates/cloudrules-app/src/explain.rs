//! The `explain` use case: look up rule documentation.

use cloudrules_domain::{RuleMeta, registry};
use cloudrules_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found a registered rule.
    Found {
        meta: &'static RuleMeta,
        help_text: &'static str,
        explanation: Option<Explanation>,
    },
    /// Unknown rule key; includes the documented keys that are registered in this build.
    NotFound {
        rule_key: String,
        available: Vec<&'static str>,
    },
}

/// Look up documentation for a rule key.
pub fn run_explain(rule_key: &str) -> ExplainOutput {
    match registry().get(rule_key) {
        Some(rule) => ExplainOutput::Found {
            meta: rule.meta(),
            help_text: rule.help_text(),
            explanation: explain::lookup_explanation(rule_key),
        },
        None => ExplainOutput::NotFound {
            rule_key: rule_key.to_string(),
            available: explain::all_rule_keys()
                .iter()
                .copied()
                .filter(|key| registry().get(key).is_some())
                .collect(),
        },
    }
}

/// Format rule documentation for terminal display.
pub fn format_explanation(
    meta: &RuleMeta,
    help_text: &str,
    explanation: Option<&Explanation>,
) -> String {
    let mut out = String::new();

    let title = explanation.map(|e| e.title).unwrap_or(meta.key);
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");
    out.push_str(&format!("Rule key:         {}\n", meta.key));
    out.push_str(&format!("Default severity: {}\n", meta.severity.as_str()));
    out.push_str(&format!("Default category: {}\n\n", meta.category.as_str()));
    out.push_str(meta.description);
    out.push_str("\n\n");
    out.push_str(help_text);
    out.push('\n');

    let Some(exp) = explanation else {
        return out;
    };

    out.push('\n');
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (violation):\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (fixed):\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(rule_key: &str, available: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule key: {}\n\n", rule_key));
    out.push_str("Available rules:\n");
    for key in available {
        out.push_str(&format!("  - {}\n", key));
    }

    out
}
