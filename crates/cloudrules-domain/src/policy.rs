use crate::error::RuleError;
use crate::model::{ExecutionContext, ResourceAttributes, RunParameters};
use cloudrules_types::{Category, EvaluationResult, Severity};

/// Static registration record a rule declares once.
///
/// The engine reads this at registration time; evaluation never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleMeta {
    pub key: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub category: Category,
}

/// Contract every compliance rule implements.
///
/// Rules are stateless: `evaluate` is a pure function of its arguments and
/// may be called concurrently for different resources.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &'static RuleMeta;

    /// Evaluate one resource.
    ///
    /// `attributes` is `None` when the engine has no snapshot for the resource,
    /// which is never a violation.
    fn evaluate(
        &self,
        ctx: &ExecutionContext,
        params: &RunParameters,
        attributes: Option<&ResourceAttributes>,
    ) -> Result<EvaluationResult, RuleError>;

    fn help_text(&self) -> &'static str;

    fn key(&self) -> &'static str {
        self.meta().key
    }
}
