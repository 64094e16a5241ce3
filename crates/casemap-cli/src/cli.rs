//! CLI argument definitions for the import type mapper.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use casemap_model::{MappedField, UnmappedAction};

#[derive(Parser)]
#[command(
    name = "casemap",
    version,
    about = "Map imported type labels onto case-management picklists",
    long_about = "Map type labels from a third-party export onto the destination picklists.\n\n\
                  Suggest mappings for review, validate a reviewed mapping config, and\n\
                  resolve every row of an import CSV against it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow imported values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest mappings for the distinct values of one import column.
    Suggest(SuggestArgs),

    /// Validate a mapping config against the current picklists.
    Validate(ValidateArgs),

    /// Resolve import rows to picklist values.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Import CSV file.
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,

    /// Column holding the external type labels.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: String,

    /// Picklist field the column maps to (update-type or event-type).
    #[arg(long = "field", value_parser = str::parse::<MappedField>)]
    pub field: MappedField,

    /// JSON file with the current picklist values.
    #[arg(long = "targets", value_name = "JSON")]
    pub targets: PathBuf,

    /// Existing mapping config to update when writing `--output`.
    #[arg(long = "config", value_name = "JSON", requires = "output")]
    pub config: Option<PathBuf>,

    /// Write the suggestions into a mapping config file.
    #[arg(long = "output", value_name = "JSON")]
    pub output: Option<PathBuf>,

    /// Print suggestions as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Mapping config JSON file.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// JSON file with the current picklist values.
    #[arg(long = "targets", value_name = "JSON")]
    pub targets: PathBuf,
}

#[derive(Parser)]
#[command(group(
    ArgGroup::new("columns")
        .required(true)
        .multiple(true)
        .args(["update_type_column", "event_type_column"])
))]
pub struct ResolveArgs {
    /// Import CSV file.
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,

    /// Mapping config JSON file.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// JSON file with the current picklist values.
    #[arg(long = "targets", value_name = "JSON")]
    pub targets: PathBuf,

    /// Column holding update type labels.
    #[arg(long = "update-type-column", value_name = "COLUMN")]
    pub update_type_column: Option<String>,

    /// Column holding event type labels.
    #[arg(long = "event-type-column", value_name = "COLUMN")]
    pub event_type_column: Option<String>,

    /// Override the config's policy for values nothing matches
    /// (skip, use-original or use-default).
    #[arg(long = "unmapped-action", value_parser = str::parse::<UnmappedAction>)]
    pub unmapped_action: Option<UnmappedAction>,

    /// Output CSV (default: stdout).
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

impl ResolveArgs {
    /// Requested (field, column) pairs in field order.
    pub fn columns(&self) -> Vec<(MappedField, &str)> {
        [
            (MappedField::UpdateType, self.update_type_column.as_deref()),
            (MappedField::EventType, self.event_type_column.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, column)| column.map(|c| (field, c)))
        .collect()
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
