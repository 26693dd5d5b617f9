use crate::model::{ResourceAttributes, RunParameters};
use cloudrules_types::ids;

pub fn params(pairs: &[(&str, &str)]) -> RunParameters {
    pairs.iter().copied().collect()
}

pub fn attrs(pairs: &[(&str, &str)]) -> ResourceAttributes {
    pairs.iter().copied().collect()
}

/// Parameters that pass configuration checks.
pub fn configured_params(resource_id: &str) -> RunParameters {
    RunParameters::new()
        .with(ids::PARAM_SEVERITY, "MEDIUM")
        .with(ids::PARAM_CATEGORY, "SECURITY")
        .with(ids::PARAM_RESOURCE_ID, resource_id)
}
