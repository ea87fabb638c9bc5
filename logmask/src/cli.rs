// logmask/src/cli.rs
//! Command-line interface definition for the logmask application.

use clap::{Parser, Subcommand, ValueEnum};
use logmask_core::StrategyKind;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "logmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask sensitive field values in log text",
    long_about = "logmask replaces the values of sensitive fields (e.g. firstName=[Gustaw]) in log text with a fixed mask or a short fingerprint. Log shapes are described by templates; every template is combined with every sensitive field name.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging for the logmask crates.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks sensitive values in a file or stdin.
    #[command(about = "Masks sensitive values in a file or stdin.")]
    Mask(MaskCommand),

    /// Lists the predefined templates.
    #[command(about = "Lists the predefined template names and their patterns.")]
    Templates,
}

/// Arguments for the `mask` command.
#[derive(Parser, Debug, Default)]
pub struct MaskCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write masked output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a decorator configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "LOGMASK_CONFIG", help = "Path to a decorator configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Start from every predefined template.
    #[arg(long = "all-templates", conflicts_with = "config", help = "Start from the built-in configuration with every predefined template.")]
    pub all_templates: bool,

    /// Overrides the strategy from the configuration file.
    #[arg(long, short = 's', value_enum, help = "Masking strategy (overrides the configuration file).")]
    pub strategy: Option<StrategyChoice>,

    /// Predefined template names to add (comma-separated).
    #[arg(long = "template", short = 't', value_delimiter = ',', help = "Predefined template names to add (comma-separated).")]
    pub templates: Vec<String>,

    /// Custom templates to add; repeat the flag for several.
    #[arg(long = "custom-template", value_name = "PATTERN", help = "Custom template containing [PROPERTY_NAME]; repeat for several.")]
    pub custom_templates: Vec<String>,

    /// Sensitive field names to add (comma-separated).
    #[arg(long = "field", short = 'f', value_delimiter = ',', help = "Sensitive field names to add (comma-separated).")]
    pub fields: Vec<String>,

    /// Mask literal for the `mask` strategy.
    #[arg(long, value_name = "LITERAL", help = "Mask literal used by the 'mask' strategy.")]
    pub mask: Option<String>,

    /// Process input line by line, flushing after every line.
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,

    /// Treat every line as a JSON event and mask its string values.
    #[arg(long = "json-lines", help = "Parse every line as a JSON event and mask each string value.")]
    pub json_lines: bool,
}

/// Strategy selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StrategyChoice {
    /// Replace values with the mask literal.
    Mask,
    /// Replace values with first char, length and last char.
    Shortcut,
}

impl From<StrategyChoice> for StrategyKind {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Mask => StrategyKind::Mask,
            StrategyChoice::Shortcut => StrategyKind::Shortcut,
        }
    }
}
