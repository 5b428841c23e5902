//! CLI argument definitions for coinstats.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `coins` | List coins, record counts and the slider bounds |
//! | `view` | Compute a chart frame for a coin, metric and date range |
//! | `hover` | Resolve the tooltip for a mouse position or date |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--data` | `$COINSTATS_DATA` or `data/coins.json` | Dataset path |
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and errors as failures |
//!
//! # Examples
//!
//! ```bash
//! coinstats coins --pretty
//! coinstats view --coin bitcoin --metric price_usd --from 01/01/2015 --to 31/12/2016
//! coinstats hover --coin ethereum --metric market_cap --date 15/08/2016
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Coin market chart computations from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "coinstats",
    author,
    version,
    about = "Coin market chart computations",
    long_about = "Loads a coin market dataset and computes what an interactive chart shows: \
the visible series, axis domains and ticks, the line path, and hover tooltips.\n\
\n\
Use 'coinstats <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Path to the JSON dataset.
    ///
    /// Falls back to COINSTATS_DATA, then data/coins.json.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List loaded coins with observation and skip counts.
    Coins,

    /// Compute the chart frame for one coin and metric.
    ///
    /// # Examples
    ///
    ///   coinstats view --coin bitcoin --metric 24h_vol
    ///   coinstats view --coin ripple --metric price --from 01/01/2017 --path
    View(ViewArgs),

    /// Resolve the tooltip shown for a mouse position.
    ///
    /// # Examples
    ///
    ///   coinstats hover --coin bitcoin --metric price --x 320
    ///   coinstats hover --coin bitcoin --metric price --date 15/05/2015
    Hover(HoverArgs),
}

/// Selection shared by every chart command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Coin id as it appears in the dataset (e.g., bitcoin).
    #[arg(long)]
    pub coin: String,

    /// Metric to plot: 24h_vol, market_cap or price_usd.
    #[arg(long, default_value = "price_usd")]
    pub metric: String,

    /// First visible date (DD/MM/YYYY). Defaults to the slider minimum.
    #[arg(long)]
    pub from: Option<String>,

    /// Last visible date (DD/MM/YYYY). Defaults to the slider maximum.
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the `view` command.
#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Include the SVG path data for the line.
    #[arg(long, default_value_t = false)]
    pub path: bool,
}

/// Arguments for the `hover` command.
#[derive(Debug, Args)]
pub struct HoverArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Mouse x position in plot pixels.
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "date",
        conflicts_with = "date"
    )]
    pub x: Option<f64>,

    /// Date under the cursor (DD/MM/YYYY).
    #[arg(long)]
    pub date: Option<String>,
}
