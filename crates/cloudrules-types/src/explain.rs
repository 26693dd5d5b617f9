//! Explain registry for rules.
//!
//! Maps rule keys to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after attribute snapshots.
    pub examples: ExamplePair,
}

/// Before and after resource attribute examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Attributes that would trigger a finding.
    pub before: &'static str,
    /// Attributes that pass the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule key.
///
/// Returns `None` if the key is not recognized.
pub fn lookup_explanation(rule_key: &str) -> Option<Explanation> {
    match rule_key {
        ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION => Some(explain_cloudtrail_log_file_validation()),
        _ => None,
    }
}

/// List all rule keys with an explanation.
pub fn all_rule_keys() -> &'static [&'static str] {
    &[ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION]
}

fn explain_cloudtrail_log_file_validation() -> Explanation {
    Explanation {
        title: "CloudTrail Log File Validation",
        description: "\
Detects CloudTrail trails that do not have log file integrity validation enabled.

With validation enabled, CloudTrail delivers a signed digest file every hour that
covers the log files delivered in that period. Without it:
- Log files can be modified or deleted after delivery without detection
- Forensic investigations cannot prove the audit trail is complete
- Several compliance frameworks (CIS AWS Foundations 3.2) are not satisfied

A trail whose validation flag is missing or empty is treated as disabled.",
        remediation: "\
Enable log file validation on the trail:

    aws cloudtrail update-trail --name <trail> --enable-log-file-validation

Or set `EnableLogFileValidation: true` on the `AWS::CloudTrail::Trail`
resource in CloudFormation (`enable_log_file_validation = true` in Terraform).",
        examples: ExamplePair {
            before: r#"{
  "cloudTrailLogFileValidation": "false"
}"#,
            after: r#"{
  "cloudTrailLogFileValidation": "true"
}"#,
        },
    }
}
