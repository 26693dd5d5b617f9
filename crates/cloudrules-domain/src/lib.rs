//! Pure rule evaluation (no IO).
//!
//! Input: run parameters and a resource attribute snapshot collected elsewhere.
//! Output: an evaluation result, or a configuration error when the rule cannot run.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod policy;
pub mod registry;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_rule};
pub use error::RuleError;
pub use model::{ExecutionContext, ResourceAttributes, RunParameters};
pub use policy::{Rule, RuleMeta};
pub use registry::{RuleRegistry, registry};
