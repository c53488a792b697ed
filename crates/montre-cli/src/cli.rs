//! CLI argument definitions for the montre configurator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "montre",
    version,
    about = "Montre configurator - assemble a region-filtered watch configuration",
    long_about = "Assemble a made-to-order watch configuration from a catalog bundle.\n\n\
                  Filters parts by region, applies compatibility rules, prices the\n\
                  selection and produces the canonical SKU and shareable query string."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a configuration and print price, violations, SKU and query.
    Resolve(ResolveArgs),

    /// Print the checkout payload for a configuration as JSON.
    Checkout(ResolveArgs),

    /// List slots and their eligible options.
    Slots(SlotsArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Path to the bundle directory (catalog.json, pricing.json, ...).
    #[arg(value_name = "BUNDLE_DIR")]
    pub bundle: PathBuf,

    /// Region code to filter the catalog by (e.g. FR-A).
    #[arg(long = "region", value_name = "CODE")]
    pub region: Option<String>,

    /// Shareable query string to restore the selection from.
    #[arg(long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Explicit choices applied after restore, in order (repeatable).
    #[arg(long = "set", value_name = "SLOT=ID")]
    pub set: Vec<String>,

    /// Print the full configuration result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SlotsArgs {
    /// Path to the bundle directory.
    #[arg(value_name = "BUNDLE_DIR")]
    pub bundle: PathBuf,

    /// Region code to filter the listing by.
    #[arg(long = "region", value_name = "CODE")]
    pub region: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
