use crate::error::RuleError;
use crate::model::{ExecutionContext, ResourceAttributes, RunParameters};
use crate::policy::Rule;
use crate::registry::registry;
use cloudrules_types::EvaluationResult;
use tracing::debug_span;

/// Evaluate the registered rule `rule_key` against one resource.
pub fn evaluate(
    rule_key: &str,
    params: &RunParameters,
    attributes: Option<&ResourceAttributes>,
) -> Result<EvaluationResult, RuleError> {
    let rule = registry()
        .get(rule_key)
        .ok_or_else(|| RuleError::UnknownRule {
            key: rule_key.to_string(),
        })?;
    evaluate_rule(rule, params, attributes)
}

/// Evaluate `rule` inside a span carrying the call's execution context.
///
/// The span lives only for this call, so concurrent evaluations never see
/// each other's identifiers.
pub fn evaluate_rule(
    rule: &dyn Rule,
    params: &RunParameters,
    attributes: Option<&ResourceAttributes>,
) -> Result<EvaluationResult, RuleError> {
    let ctx = ExecutionContext::from_params(params);
    let span = debug_span!(
        "rule.evaluate",
        rule_key = rule.key(),
        execution_id = ctx.execution_id.as_deref(),
        policy_id = ctx.policy_id.as_deref()
    );
    let _enter = span.enter();

    rule.evaluate(&ctx, params, attributes)
}
