use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default severity a rule declares for its findings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Default category a rule declares for its findings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Security,
    Governance,
    CostOptimization,
    Tagging,
    Operations,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Security => "security",
            Category::Governance => "governance",
            Category::CostOptimization => "costOptimization",
            Category::Tagging => "tagging",
            Category::Operations => "operations",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationType {
    #[default]
    Issue,
}

/// One reason a resource was found in violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub violation_reason: String,
}

/// Structured finding emitted when a rule detects a violation.
///
/// `severity` and `category` are copied verbatim from the run parameters: the
/// engine that supplies them owns their vocabulary, so no normalization happens
/// here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(rename = "type", default)]
    pub annotation_type: AnnotationType,
    pub rule_key: String,
    pub description: String,
    pub severity: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,

    pub issue_details: Vec<Issue>,
}

/// Outcome of evaluating one rule against one resource.
///
/// The annotation lives inside the `Failure` variant, so a success can never
/// carry one and a failure can never lack one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EvaluationResult {
    Success {
        message: String,
    },
    Failure {
        message: String,
        annotation: Annotation,
    },
}

impl EvaluationResult {
    pub fn success() -> Self {
        EvaluationResult::Success {
            message: ids::MESSAGE_SUCCESS.to_string(),
        }
    }

    pub fn failure(annotation: Annotation) -> Self {
        EvaluationResult::Failure {
            message: ids::MESSAGE_FAILURE.to_string(),
            annotation,
        }
    }

    pub fn status(&self) -> PolicyStatus {
        match self {
            EvaluationResult::Success { .. } => PolicyStatus::Success,
            EvaluationResult::Failure { .. } => PolicyStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == PolicyStatus::Success
    }

    pub fn message(&self) -> &str {
        match self {
            EvaluationResult::Success { message } | EvaluationResult::Failure { message, .. } => {
                message
            }
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            EvaluationResult::Success { .. } => None,
            EvaluationResult::Failure { annotation, .. } => Some(annotation),
        }
    }

    pub fn into_annotation(self) -> Option<Annotation> {
        match self {
            EvaluationResult::Success { .. } => None,
            EvaluationResult::Failure { annotation, .. } => Some(annotation),
        }
    }
}
