use crate::evaluate::EvaluateOutput;
use anyhow::Context;
use cloudrules_types::{EvaluationResult, PolicyStatus};

/// Serialize a result to pretty JSON with a trailing newline.
pub fn serialize_result(result: &EvaluationResult) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(result).context("serialize result")?;
    json.push('\n');
    Ok(json)
}

/// Exit code for an evaluate run: failures are 2, everything else 0.
pub fn output_exit_code(output: &EvaluateOutput) -> i32 {
    match output {
        EvaluateOutput::Evaluated { result, .. } => match result.status() {
            PolicyStatus::Success => 0,
            PolicyStatus::Failure => 2,
        },
        EvaluateOutput::Skipped { .. } => 0,
    }
}

/// One-line human summary for stderr.
pub fn format_summary(output: &EvaluateOutput) -> String {
    match output {
        EvaluateOutput::Evaluated {
            rule_key, result, ..
        } => match result.annotation() {
            Some(annotation) => format!(
                "{rule_key}: {} ({}): {}",
                result.message(),
                annotation.resource_id.as_deref().unwrap_or("<no resource id>"),
                annotation.description
            ),
            None => format!("{rule_key}: {}", result.message()),
        },
        EvaluateOutput::Skipped { rule_key } => format!("{rule_key}: skipped (disabled in config)"),
    }
}
