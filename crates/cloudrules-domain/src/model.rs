use cloudrules_types::ids;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters the rule engine supplies for one invocation.
///
/// Keys of interest are `severity`, `category`, `resourceId`, `executionId`
/// and `policyId`; anything else is carried but ignored by the built-in rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunParameters(BTreeMap<String, String>);

impl RunParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key` when present and non-empty.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn severity(&self) -> Option<&str> {
        self.get(ids::PARAM_SEVERITY)
    }

    pub fn category(&self) -> Option<&str> {
        self.get(ids::PARAM_CATEGORY)
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.get(ids::PARAM_RESOURCE_ID)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RunParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Key-value snapshot of one scanned resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceAttributes(BTreeMap<String, String>);

impl ResourceAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Diagnostic identifiers for one evaluation.
///
/// Built per call and passed explicitly; nothing here is stored globally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    pub execution_id: Option<String>,
    pub policy_id: Option<String>,
}

impl ExecutionContext {
    pub fn from_params(params: &RunParameters) -> Self {
        Self {
            execution_id: params.value(ids::PARAM_EXECUTION_ID).map(str::to_string),
            policy_id: params.value(ids::PARAM_POLICY_ID).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_skips_empty_strings() {
        let params = RunParameters::new()
            .with(ids::PARAM_SEVERITY, "")
            .with(ids::PARAM_CATEGORY, "SECURITY");
        assert_eq!(params.severity(), Some(""));
        assert_eq!(params.value(ids::PARAM_SEVERITY), None);
        assert_eq!(params.value(ids::PARAM_CATEGORY), Some("SECURITY"));
    }

    #[test]
    fn context_reads_execution_and_policy_ids() {
        let params: RunParameters = [
            (ids::PARAM_EXECUTION_ID, "exec-1"),
            (ids::PARAM_POLICY_ID, ""),
        ]
        .into_iter()
        .collect();
        let ctx = ExecutionContext::from_params(&params);
        assert_eq!(ctx.execution_id.as_deref(), Some("exec-1"));
        assert_eq!(ctx.policy_id, None);
    }

    #[test]
    fn parameters_deserialize_from_flat_json_object() {
        let params: RunParameters =
            serde_json::from_str(r#"{"severity":"MEDIUM","resourceId":"r1"}"#).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.resource_id(), Some("r1"));
        let attrs: ResourceAttributes = serde_json::from_str("{}").unwrap();
        assert!(attrs.is_empty());
    }
}
