//! Config parsing and run parameter resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CloudRulesConfigV1, RuleConfig};
pub use resolve::{ResolvedRun, RunOverrides};

/// Parse `cloudrules.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CloudRulesConfigV1> {
    let cfg: CloudRulesConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the run parameters for one rule (rule defaults + per-rule config + overrides).
pub fn resolve_run_params(
    meta: &cloudrules_domain::RuleMeta,
    cfg: &CloudRulesConfigV1,
    overrides: RunOverrides,
) -> anyhow::Result<ResolvedRun> {
    resolve::resolve_run_params(meta, cfg, overrides)
}
