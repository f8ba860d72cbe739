//! Command-line argument parsing for ism-tui.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `ism_config`).

use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

/// Command-line arguments for ism-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --profile, --config-path)
/// 2. Environment variables (e.g., ISM_PROFILE, ISM_BASE_URL)
/// 3. Profile configuration (from config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "ism-tui",
    about = "Terminal user interface for OpenSearch Index State Management",
    version,
    after_help = "Examples:\n  ism-tui\n  ism-tui --profile production\n  ism-tui --fresh\n  ism-tui --preview-index kibana_sample_data_ecommerce\n  ism-tui --preview-index logs --preview-filter '{\"term\":{\"level\":\"error\"}}'\n"
)]
pub struct Cli {
    /// Config profile name to load
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with fresh state, ignoring any persisted state
    #[arg(long)]
    pub fresh: bool,

    /// Source index to preview sample data from
    #[arg(long)]
    pub preview_index: Option<String>,

    /// Query DSL filter (JSON) applied to the preview sample
    #[arg(long, requires = "preview_index", value_parser = parse_json_filter)]
    pub preview_filter: Option<Value>,
}

fn parse_json_filter(raw: &str) -> Result<Value, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err("filter must be a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {e}")),
    }
}
