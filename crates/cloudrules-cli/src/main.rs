//! CLI entry point for cloudrules.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `cloudrules-app` crate.

use anyhow::Context;
use clap::{Parser, Subcommand};
use cloudrules_app::{
    EvaluateInput, EvaluateOutput, ExplainOutput, format_explanation, format_not_found,
    format_rule_list, format_summary, output_exit_code, run_evaluate, run_explain, run_list,
    serialize_result,
};
use cloudrules_settings::RunOverrides;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cloudrules",
    version,
    about = "Run cloud resource compliance rules against attribute snapshots"
)]
struct Cli {
    /// Path to cloudrules config TOML (a missing file means defaults).
    #[arg(long, default_value = "cloudrules.toml")]
    config: PathBuf,

    /// Log filter, e.g. `debug` or `cloudrules_domain=debug`. Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one rule against one resource snapshot and print the result as JSON.
    Evaluate {
        /// Rule key, e.g. "check-cloudtrail-log-file-validation-enabled".
        #[arg(long)]
        rule: String,

        /// JSON object of run parameters. When omitted they are resolved from config.
        #[arg(long)]
        params: Option<PathBuf>,

        /// JSON object of resource attributes. When omitted the resource has no snapshot.
        #[arg(long)]
        attributes: Option<PathBuf>,

        /// Resource id used when resolving parameters from config.
        #[arg(long)]
        resource_id: Option<String>,

        /// Execution id used when resolving parameters from config.
        #[arg(long)]
        execution_id: Option<String>,

        /// Policy id used when resolving parameters from config (defaults to the rule key).
        #[arg(long)]
        policy_id: Option<String>,

        /// Where to write the JSON result (stdout if not specified).
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Explain a rule: metadata, help text, and remediation guidance.
    Explain {
        /// The rule key to explain.
        rule_key: String,
    },

    /// List registered rules.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    match cli.cmd {
        Commands::Evaluate {
            ref rule,
            ref params,
            ref attributes,
            ref resource_id,
            ref execution_id,
            ref policy_id,
            ref out,
        } => {
            let overrides = RunOverrides {
                resource_id: resource_id.clone(),
                execution_id: execution_id.clone(),
                policy_id: policy_id.clone(),
            };
            cmd_evaluate(
                &cli.config,
                rule,
                params.as_deref(),
                attributes.as_deref(),
                overrides,
                out.as_deref(),
            )
        }
        Commands::Explain { rule_key } => cmd_explain(&rule_key),
        Commands::List => {
            print!("{}", format_rule_list(&run_list()));
            Ok(())
        }
    }
}

fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(l) => EnvFilter::try_new(l).with_context(|| format!("invalid log level: {l}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn cmd_evaluate(
    config: &Path,
    rule_key: &str,
    params: Option<&Path>,
    attributes: Option<&Path>,
    overrides: RunOverrides,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_config(config)?;
        debug!(config = %config.display(), loaded = !config_text.is_empty(), "config");

        let params_text = params.map(read_input).transpose()?;
        let attributes_text = attributes.map(read_input).transpose()?;

        let output = run_evaluate(EvaluateInput {
            rule_key,
            params_json: params_text.as_deref(),
            attributes_json: attributes_text.as_deref(),
            config_text: &config_text,
            overrides,
        })?;

        if let EvaluateOutput::Evaluated { result, .. } = &output {
            let json = serialize_result(result)?;
            match out {
                Some(path) => write_text_file(path, &json).context("write result json")?,
                None => print!("{json}"),
            }
        }
        eprintln!("{}", format_summary(&output));

        Ok(output_exit_code(&output))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("cloudrules error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Read the config file. A missing file is allowed (defaults apply); any other failure is an error.
fn read_config(path: &Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {}", path.display())),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read input: {}", path.display()))
}

fn write_text_file(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path.display()))?;
    Ok(())
}

fn cmd_explain(rule_key: &str) -> anyhow::Result<()> {
    match run_explain(rule_key) {
        ExplainOutput::Found {
            meta,
            help_text,
            explanation,
        } => {
            print!(
                "{}",
                format_explanation(meta, help_text, explanation.as_ref())
            );
            Ok(())
        }
        ExplainOutput::NotFound {
            rule_key,
            available,
        } => {
            eprint!("{}", format_not_found(&rule_key, &available));
            std::process::exit(1);
        }
    }
}
