use crate::error::RuleError;
use crate::registry::RuleRegistry;

#[cfg(feature = "rule-cloudtrail-log-file-validation")]
pub mod cloudtrail_log_file_validation;
mod utils;


pub use utils::{build_failure, ensure_configured, is_flag_disabled};

/// Register every rule compiled into this build.
#[allow(unused_variables)]
pub fn register_builtin(registry: &mut RuleRegistry) -> Result<(), RuleError> {
    #[cfg(feature = "rule-cloudtrail-log-file-validation")]
    registry.register(cloudtrail_log_file_validation::CloudTrailLogFileValidation)?;
    Ok(())
}
