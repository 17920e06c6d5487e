//! CLI argument definitions for the catalog browser.

use std::path::PathBuf;

use catalog_core::Layout;
use catalog_model::CategoryFilter;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-browser",
    version,
    about = "Browse a destination catalog from the terminal",
    long_about = "Browse a destination catalog from the terminal.\n\n\
                  Loads a destination document, applies filters and deep links,\n\
                  and prints the resulting views as text or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the catalog and print a single view.
    Show(ShowArgs),

    /// Run a script of browser actions and print every view.
    Replay(ReplayArgs),

    /// List categories with item counts and subcategories.
    Categories(SourceArgs),
}

/// Where the catalog comes from and how it is labelled.
#[derive(Args)]
pub struct SourceArgs {
    /// Destination document (default: `data_path` from settings).
    #[arg(value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// Language for destination text and labels.
    #[arg(long = "lang", value_name = "CODE")]
    pub language: Option<String>,

    /// Label table with translated category and interface strings.
    #[arg(long = "i18n", value_name = "PATH")]
    pub i18n: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Presentation of the list pane.
    #[arg(long = "layout", value_enum)]
    pub layout: Option<LayoutArg>,

    /// Print views as JSON lines.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Deep link to open, e.g. `#dest/salto-del-laja`.
    #[arg(long = "fragment", value_name = "FRAGMENT", default_value = "")]
    pub fragment: String,

    /// Category key, or `all`.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<CategoryFilter>,

    /// Subcategory within the selected category.
    #[arg(long = "subcategory", value_name = "SUBCATEGORY")]
    pub subcategory: Option<String>,

    /// Free-text search; accents and case are ignored.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Script file with one command per line (default: stdin).
    #[arg(long = "script", value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Fragment the session starts at.
    #[arg(long = "fragment", value_name = "FRAGMENT", default_value = "")]
    pub fragment: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Grid,
    List,
    Map,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Grid => Layout::Grid,
            LayoutArg::List => Layout::List,
            LayoutArg::Map => Layout::Map,
        }
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
