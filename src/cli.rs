use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SIP AI water-quality advisory.
#[derive(Parser)]
#[command(
    name = "sipai",
    version,
    about = "Irrigation water-quality status and crop advisory"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the overall water status.
    Status(StatusArgs),
    /// Print per-crop recommendations as JSON.
    Recommend(RecommendArgs),
    /// Build the full advisory report.
    Report(ReportArgs),
    /// Ask the advisor a question.
    Ask(AskArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the fixture directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `recommend` subcommand.
#[derive(clap::Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Crop to evaluate (repeatable). Defaults to the crop fixture.
    #[arg(long = "crop", value_name = "NAME")]
    pub crops: Vec<String>,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path for report JSON output. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `ask` subcommand.
#[derive(clap::Args)]
pub struct AskArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Question text.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}
