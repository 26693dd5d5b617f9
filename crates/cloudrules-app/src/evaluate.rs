//! The `evaluate` use case: resolve parameters and run one rule against one resource.

use anyhow::Context;
use cloudrules_domain::{ResourceAttributes, RuleError, RunParameters, registry};
use cloudrules_settings::{CloudRulesConfigV1, RunOverrides};
use cloudrules_types::EvaluationResult;
use serde_json::Value;
use tracing::{info, warn};

/// Input for the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    /// Key of the registered rule to run.
    pub rule_key: &'a str,
    /// Explicit run parameters as a JSON object. Takes precedence over config resolution.
    pub params_json: Option<&'a str>,
    /// Resource attributes as a JSON object; `null` or `None` means no snapshot.
    pub attributes_json: Option<&'a str>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Identifiers used when parameters are resolved from config.
    pub overrides: RunOverrides,
}

/// Output from the evaluate use case.
#[derive(Clone, Debug, PartialEq)]
pub enum EvaluateOutput {
    Evaluated {
        rule_key: String,
        params: RunParameters,
        result: EvaluationResult,
    },
    /// The rule is disabled in config; nothing was evaluated.
    Skipped { rule_key: String },
}

/// Run the evaluate use case: parse config, resolve parameters (unless given explicitly),
/// parse attributes, evaluate.
///
/// Configuration errors from the rule are returned as errors, never as results.
pub fn run_evaluate(input: EvaluateInput<'_>) -> anyhow::Result<EvaluateOutput> {
    let rule = registry()
        .get(input.rule_key)
        .ok_or_else(|| RuleError::UnknownRule {
            key: input.rule_key.to_string(),
        })?;

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        CloudRulesConfigV1::default()
    } else {
        cloudrules_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    for key in cfg.rules.keys() {
        if registry().get(key).is_none() {
            warn!(rule_key = %key, "config references an unregistered rule");
        }
    }

    if !cfg.rule_enabled(rule.key()) {
        info!(rule_key = rule.key(), "rule disabled in config; skipping");
        return Ok(EvaluateOutput::Skipped {
            rule_key: rule.key().to_string(),
        });
    }

    // Explicit params replace config resolution entirely, so config severity/category is not read.
    let params = match input.params_json {
        Some(text) => RunParameters::from_iter(
            parse_string_map(text).context("parse run parameters")?.unwrap_or_default(),
        ),
        None => {
            cloudrules_settings::resolve_run_params(rule.meta(), &cfg, input.overrides)
                .context("resolve run parameters")?
                .params
        }
    };

    let attributes = match input.attributes_json {
        Some(text) => parse_string_map(text)
            .context("parse resource attributes")?
            .map(ResourceAttributes::from_iter),
        None => None,
    };

    let result = cloudrules_domain::evaluate_rule(rule, &params, attributes.as_ref())
        .with_context(|| format!("evaluate {}", rule.key()))?;

    Ok(EvaluateOutput::Evaluated {
        rule_key: rule.key().to_string(),
        params,
        result,
    })
}

/// Parse a flat JSON object into string pairs.
///
/// Collectors do not always quote scalars, so booleans and numbers are kept as
/// their JSON text. Nested values are kept as compact JSON. A top-level `null`
/// yields `None`.
fn parse_string_map(text: &str) -> anyhow::Result<Option<Vec<(String, String)>>> {
    let value: Value = serde_json::from_str(text)?;
    let map = match value {
        Value::Null => return Ok(None),
        Value::Object(map) => map,
        other => anyhow::bail!("expected a JSON object, found {}", json_kind(&other)),
    };

    let pairs = map
        .into_iter()
        .filter_map(|(k, v)| {
            let s = match v {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((k, s))
        })
        .collect();
    Ok(Some(pairs))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
