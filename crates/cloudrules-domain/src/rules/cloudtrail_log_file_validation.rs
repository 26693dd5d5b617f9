//! CloudTrail trails must have log file integrity validation enabled.

use crate::error::RuleError;
use crate::model::{ExecutionContext, ResourceAttributes, RunParameters};
use crate::policy::{Rule, RuleMeta};
use crate::rules::utils::{build_failure, ensure_configured, is_flag_disabled};
use cloudrules_types::{Category, EvaluationResult, Severity, ids};
use tracing::debug;

pub static META: RuleMeta = RuleMeta {
    key: ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION,
    description: "This rule checks for AWS CloudTrail logfile validation enabled",
    severity: Severity::Medium,
    category: Category::Security,
};

pub const HELP_TEXT: &str = "Checks the CloudTrail log file validation is enabled.";

pub const DESCRIPTION_DISABLED: &str = "CloudTrail log file validation is disabled";

#[derive(Clone, Copy, Debug, Default)]
pub struct CloudTrailLogFileValidation;

impl Rule for CloudTrailLogFileValidation {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn evaluate(
        &self,
        ctx: &ExecutionContext,
        params: &RunParameters,
        attributes: Option<&ResourceAttributes>,
    ) -> Result<EvaluationResult, RuleError> {
        debug!("cloudtrail log file validation check started");

        ensure_configured(&META, params)?;

        // No parameters means nothing to annotate with; treated as a pass.
        let result = match attributes.and_then(check_validation) {
            Some(description) if !params.is_empty() => {
                build_failure(&META, ctx, params, description)
            }
            _ => EvaluationResult::success(),
        };

        debug!(status = ?result.status(), "cloudtrail log file validation check ended");
        Ok(result)
    }

    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }
}

fn check_validation(attributes: &ResourceAttributes) -> Option<&'static str> {
    is_flag_disabled(attributes.get(ids::ATTR_CLOUDTRAIL_LOG_FILE_VALIDATION))
        .then_some(DESCRIPTION_DISABLED)
}
