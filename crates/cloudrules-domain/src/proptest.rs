//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the pass/fail partition of the log file validation flag
//! - annotation presence tracking the result status
//! - configuration errors never surfacing as results

use crate::engine::evaluate;
use crate::model::{ResourceAttributes, RunParameters};
use cloudrules_types::{PolicyStatus, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Any flag value, weighted towards the interesting ones.
fn arb_flag_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("false".to_string())),
        Just(Some("true".to_string())),
        "[A-Za-z0-9 ]{0,12}".prop_map(Some),
    ]
}

/// Non-empty parameter values.
fn arb_label() -> impl Strategy<Value = String> {
    "[A-Z][A-Z_]{0,15}"
}

fn arb_resource_id() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z0-9-]{1,24}")
}

fn attributes_with(flag: &Option<String>) -> ResourceAttributes {
    match flag {
        Some(v) => ResourceAttributes::new().with(ids::ATTR_CLOUDTRAIL_LOG_FILE_VALIDATION, v),
        None => ResourceAttributes::new(),
    }
}

fn configured(severity: &str, category: &str, resource_id: &Option<String>) -> RunParameters {
    let params = RunParameters::new()
        .with(ids::PARAM_SEVERITY, severity)
        .with(ids::PARAM_CATEGORY, category);
    match resource_id {
        Some(id) => params.with(ids::PARAM_RESOURCE_ID, id),
        None => params,
    }
}

// ============================================================================
// Properties
// ============================================================================

#[cfg(feature = "rule-cloudtrail-log-file-validation")]
proptest! {
    #[test]
    fn flag_partition_decides_status(
        flag in arb_flag_value(),
        severity in arb_label(),
        category in arb_label(),
        resource_id in arb_resource_id(),
    ) {
        let params = configured(&severity, &category, &resource_id);
        let attributes = attributes_with(&flag);

        let result = evaluate(ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION, &params, Some(&attributes))
            .unwrap();

        let disabled = matches!(flag.as_deref(), None | Some("") | Some("false"));
        let expected = if disabled { PolicyStatus::Failure } else { PolicyStatus::Success };
        prop_assert_eq!(result.status(), expected);
    }

    #[test]
    fn annotation_present_iff_failure(
        flag in arb_flag_value(),
        severity in arb_label(),
        category in arb_label(),
        resource_id in arb_resource_id(),
    ) {
        let params = configured(&severity, &category, &resource_id);
        let attributes = attributes_with(&flag);

        let result = evaluate(ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION, &params, Some(&attributes))
            .unwrap();

        prop_assert_eq!(result.annotation().is_some(), result.status() == PolicyStatus::Failure);
        if let Some(annotation) = result.annotation() {
            prop_assert_eq!(&annotation.severity, &severity);
            prop_assert_eq!(&annotation.category, &category);
            prop_assert_eq!(&annotation.resource_id, &resource_id);
            prop_assert_eq!(annotation.issue_details.len(), 1);
            prop_assert_eq!(&annotation.issue_details[0].violation_reason, &annotation.description);
        }
    }

    #[test]
    fn blank_severity_or_category_is_always_an_error(
        flag in arb_flag_value(),
        label in arb_label(),
        blank_severity in any::<bool>(),
        with_attributes in any::<bool>(),
    ) {
        let (severity, category) = if blank_severity {
            (String::new(), label)
        } else {
            (label, String::new())
        };
        let params = configured(&severity, &category, &None);
        let attributes = attributes_with(&flag);

        let outcome = evaluate(
            ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION,
            &params,
            with_attributes.then_some(&attributes),
        );

        let err = outcome.unwrap_err();
        prop_assert_eq!(err.code(), ids::CODE_MISSING_CONFIGURATION);
    }

    #[test]
    fn absent_attributes_always_pass(
        severity in arb_label(),
        category in arb_label(),
        resource_id in arb_resource_id(),
    ) {
        let params = configured(&severity, &category, &resource_id);
        let result = evaluate(ids::RULE_CLOUDTRAIL_LOG_FILE_VALIDATION, &params, None).unwrap();
        prop_assert!(result.is_success());
    }
}
