use crate::model::CloudRulesConfigV1;
use anyhow::Context;
use cloudrules_domain::{RuleMeta, RunParameters};
use cloudrules_types::{Category, Severity, ids};
use tracing::debug;

/// Per-invocation identifiers supplied by the caller.
#[derive(Clone, Debug, Default)]
pub struct RunOverrides {
    pub resource_id: Option<String>,
    pub execution_id: Option<String>,
    /// Defaults to the rule key when unset.
    pub policy_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedRun {
    pub enabled: bool,
    pub severity: Severity,
    pub category: Category,
    pub params: RunParameters,
}

pub fn resolve_run_params(
    meta: &RuleMeta,
    cfg: &CloudRulesConfigV1,
    overrides: RunOverrides,
) -> anyhow::Result<ResolvedRun> {
    let rule_cfg = cfg.rules.get(meta.key);

    let enabled = cfg.rule_enabled(meta.key);

    let severity = match rule_cfg.and_then(|c| c.severity.as_deref()) {
        Some(s) => parse_severity(s).with_context(|| format!("invalid severity for {}", meta.key))?,
        None => meta.severity,
    };

    let category = match rule_cfg.and_then(|c| c.category.as_deref()) {
        Some(s) => parse_category(s).with_context(|| format!("invalid category for {}", meta.key))?,
        None => meta.category,
    };

    let policy_id = overrides
        .policy_id
        .unwrap_or_else(|| meta.key.to_string());

    let mut params = RunParameters::new()
        .with(ids::PARAM_SEVERITY, severity.as_str())
        .with(ids::PARAM_CATEGORY, category.as_str())
        .with(ids::PARAM_POLICY_ID, policy_id);
    if let Some(resource_id) = overrides.resource_id {
        params = params.with(ids::PARAM_RESOURCE_ID, resource_id);
    }
    if let Some(execution_id) = overrides.execution_id {
        params = params.with(ids::PARAM_EXECUTION_ID, execution_id);
    }

    debug!(
        rule_key = meta.key,
        enabled,
        severity = severity.as_str(),
        category = category.as_str(),
        "resolved run parameters"
    );

    Ok(ResolvedRun {
        enabled,
        severity,
        category,
        params,
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "low" => Ok(Severity::Low),
        "medium" => Ok(Severity::Medium),
        "high" => Ok(Severity::High),
        "critical" => Ok(Severity::Critical),
        other => anyhow::bail!("unknown severity: {other} (expected low|medium|high|critical)"),
    }
}

fn parse_category(v: &str) -> anyhow::Result<Category> {
    match v {
        "security" => Ok(Category::Security),
        "governance" => Ok(Category::Governance),
        "costOptimization" | "cost-optimization" => Ok(Category::CostOptimization),
        "tagging" => Ok(Category::Tagging),
        "operations" => Ok(Category::Operations),
        other => anyhow::bail!(
            "unknown category: {other} (expected security|governance|costOptimization|tagging|operations)"
        ),
    }
}
