//! Stable DTOs and IDs used across the cloudrules workspace.
//!
//! This crate is intentionally boring:
//! - data types for evaluation results and annotations
//! - stable rule keys, run parameter keys, and attribute keys
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod result;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use result::{
    Annotation, AnnotationType, Category, EvaluationResult, Issue, PolicyStatus, Severity,
};
