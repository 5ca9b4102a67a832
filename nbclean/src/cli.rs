// nbclean/src/cli.rs
//! This file defines the command-line interface (CLI) for the nbclean application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use nbclean_core::CleanMode;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "nbclean",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip widget state from Jupyter notebooks",
    long_about = "nbclean removes embedded ipywidgets state (the `widgets` metadata key) from Jupyter notebooks. Notebook viewers such as GitHub's fail to render notebooks that still carry it.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", env = "NBCLEAN_THEME", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `nbclean` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Removes widget metadata at every level and rewrites the notebook in place.
    #[command(about = "Remove widget metadata from notebook, cell and output metadata, in place (keeps a .backup copy).")]
    Clean(CleanCommand),

    /// Removes notebook and cell widget metadata only and writes `<name>_cleaned.ipynb`.
    #[command(about = "Remove notebook- and cell-level widget metadata only, writing <name>_cleaned.ipynb and leaving outputs and the original untouched.")]
    WidgetsOnly(WidgetsOnlyCommand),

    /// Lists where widget metadata is present without writing anything.
    #[command(about = "List the locations of widget metadata without modifying anything.")]
    Inspect(InspectCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Path to the notebook to clean in place.
    #[arg(value_name = "NOTEBOOK", help = "Path to the notebook to clean in place.")]
    pub notebook: PathBuf,

    /// Show a unified diff of the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes made.")]
    pub diff: bool,
}

/// Arguments for the `widgets-only` command.
#[derive(Parser, Debug)]
pub struct WidgetsOnlyCommand {
    /// Path to the notebook to read; it is never modified.
    #[arg(value_name = "NOTEBOOK", help = "Path to the notebook to read; it is never modified.")]
    pub notebook: PathBuf,

    /// Show a unified diff between the original and the cleaned copy.
    #[arg(long, short = 'D', help = "Show a unified diff between the original and the cleaned copy.")]
    pub diff: bool,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Path to the notebook to inspect.
    #[arg(value_name = "NOTEBOOK", help = "Path to the notebook to inspect.")]
    pub notebook: PathBuf,

    /// Which levels to report: `full` (what `clean` removes) or `conservative` (what `widgets-only` removes).
    #[arg(
        long,
        value_name = "MODE",
        default_value = "full",
        help = "Which levels to report: `full` (what `clean` removes) or `conservative` (what `widgets-only` removes)."
    )]
    pub mode: CleanMode,

    /// Print the locations as JSON instead of a table.
    #[arg(long, help = "Print the locations as a JSON array instead of a table.")]
    pub json: bool,
}

/// Parses `args` (including the program name) without exiting the process.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
