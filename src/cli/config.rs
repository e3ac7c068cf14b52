use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::emit::options::EmitterConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "page-object-codegen",
    version,
    about = "Compile recorded browser scripts into a WebDriver page-object test suite"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: page-object-codegen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate page classes, base classes and the test harness
    Generate {
        /// Recorded project file (.json, .yaml or .yml)
        #[arg(long)]
        project: String,

        /// Output directory for the generated sources
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Java package overriding the one recorded in the project
        #[arg(long)]
        package: Option<String>,

        /// Append generation trace events (JSONL) to this file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print the page model a project compiles to, without writing files
    Inspect {
        /// Recorded project file (.json, .yaml or .yml)
        #[arg(long)]
        project: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `page-object-codegen.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub emit: EmitterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File extension of generated sources
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Write `manifest.json` with the SHA-1 of every file
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            manifest: true,
        }
    }
}

// Serde default helpers
fn default_directory() -> String { "generated".to_string() }
fn default_extension() -> String { "java".to_string() }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("page-object-codegen.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the output directory: CLI flag > config file > default.
pub fn resolve_output_dir(cli_dir: Option<&str>, config: &AppConfig) -> String {
    cli_dir
        .map(str::to_string)
        .unwrap_or_else(|| config.output.directory.clone())
}

/// Map a verbosity count to a tracing filter directive.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
