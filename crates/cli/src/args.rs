//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use recordkeep_infra::LoadPolicy;
use recordkeep_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "recordkeep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Keyed record keeping demos: warehouse, finance, school, healthcare, inventory")]
pub struct Cli {
    /// Log line format (logs go to stderr)
    #[arg(long, value_enum, env = "RECORDKEEP_LOG_FORMAT", default_value_t = LogFormatArg::Text, global = true)]
    pub log_format: LogFormatArg,

    /// Report format (reports go to stdout)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: DemoCommand,
}

#[derive(Debug, Subcommand)]
pub enum DemoCommand {
    /// Electronics and grocery stock, with the duplicate/not-found/invalid scenarios
    Warehouse,
    /// Accounts, deposits and withdrawals
    Finance,
    /// Student scores and grade reports
    School,
    /// Patients, prescriptions and dispensing
    Healthcare,
    /// Flat-file save/load of inventory records
    Inventory(InventoryArgs),
    /// Every demo in sequence
    All(InventoryArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InventoryArgs {
    /// Path of the comma-delimited inventory file
    #[arg(long, env = "RECORDKEEP_DATA_FILE", default_value = "inventory.txt")]
    pub data_file: PathBuf,

    /// Skip malformed lines instead of failing the whole load
    #[arg(long)]
    pub lenient: bool,
}

impl InventoryArgs {
    pub fn policy(&self) -> LoadPolicy {
        if self.lenient {
            LoadPolicy::Lenient
        } else {
            LoadPolicy::Strict
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
