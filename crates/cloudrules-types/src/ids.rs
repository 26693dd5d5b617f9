//! Stable identifiers for rules, run parameters, and resource attributes.
//!
//! Rule keys are kebab-case and never change once published. Parameter and
//! attribute keys are camelCase to match what the collection pipeline emits.

// Rules
pub const RULE_CLOUDTRAIL_LOG_FILE_VALIDATION: &str =
    "check-cloudtrail-log-file-validation-enabled";

// Run parameters
pub const PARAM_SEVERITY: &str = "severity";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_RESOURCE_ID: &str = "resourceId";
pub const PARAM_EXECUTION_ID: &str = "executionId";
pub const PARAM_POLICY_ID: &str = "policyId";

// Resource attributes
pub const ATTR_CLOUDTRAIL_LOG_FILE_VALIDATION: &str = "cloudTrailLogFileValidation";

// Error codes
pub const CODE_MISSING_CONFIGURATION: &str = "MISSING_CONFIGURATION";
pub const CODE_UNKNOWN_RULE: &str = "UNKNOWN_RULE";
pub const CODE_DUPLICATE_RULE: &str = "DUPLICATE_RULE";

// Result messages
pub const MESSAGE_SUCCESS: &str = "SUCCESS";
pub const MESSAGE_FAILURE: &str = "FAILED";
