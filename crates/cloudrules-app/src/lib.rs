//! Use case orchestration for cloudrules.
//!
//! This crate provides the application layer: use cases that coordinate the domain and settings
//! layers. It is intentionally thin and delegates the rule logic to `cloudrules-domain`.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod evaluate;
mod explain;
mod list;
mod render;

pub use evaluate::{EvaluateInput, EvaluateOutput, run_evaluate};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use list::{RuleSummary, format_rule_list, run_list};
pub use render::{format_summary, output_exit_code, serialize_result};
