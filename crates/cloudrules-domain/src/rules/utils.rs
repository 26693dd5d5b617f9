use crate::error::RuleError;
use crate::model::{ExecutionContext, RunParameters};
use crate::policy::RuleMeta;
use cloudrules_types::{Annotation, AnnotationType, EvaluationResult, Issue, ids};
use tracing::{debug, info};

/// Fail fast when a non-empty parameter set lacks `severity` or `category`.
///
/// An empty parameter set skips the check entirely.
pub fn ensure_configured(meta: &RuleMeta, params: &RunParameters) -> Result<(), RuleError> {
    if params.is_empty() {
        return Ok(());
    }

    let missing: Vec<&str> = [ids::PARAM_SEVERITY, ids::PARAM_CATEGORY]
        .into_iter()
        .filter(|key| params.value(key).is_none())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }

    info!(rule_key = meta.key, missing = ?missing, "{}", ids::CODE_MISSING_CONFIGURATION);
    Err(RuleError::MissingConfiguration {
        rule_key: meta.key.to_string(),
        missing: missing.join(", "),
    })
}

/// True when a boolean attribute reads as off: absent, empty, or exactly `"false"`.
pub fn is_flag_disabled(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some("false"))
}

/// Build a failure carrying one issue whose reason is `description`.
pub fn build_failure(
    meta: &RuleMeta,
    ctx: &ExecutionContext,
    params: &RunParameters,
    description: &str,
) -> EvaluationResult {
    let annotation = Annotation {
        annotation_type: AnnotationType::Issue,
        rule_key: meta.key.to_string(),
        description: description.to_string(),
        severity: params.severity().unwrap_or_default().to_string(),
        category: params.category().unwrap_or_default().to_string(),
        resource_id: params.resource_id().map(str::to_string),
        policy_id: ctx.policy_id.clone(),
        execution_id: ctx.execution_id.clone(),
        issue_details: vec![Issue {
            violation_reason: description.to_string(),
        }],
    };
    debug!(rule_key = meta.key, annotation = ?annotation, "annotation built");
    EvaluationResult::failure(annotation)
}
