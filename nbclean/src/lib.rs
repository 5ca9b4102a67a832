// nbclean/src/lib.rs
//! # nbclean CLI Application
//!
//! This crate provides the command-line interface around `nbclean-core`:
//! argument parsing, logging, file handling (backups, atomic rewrites) and
//! terminal output. The binary is a thin wrapper over [`run`], which keeps
//! the whole program callable, and testable, without spawning a process.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod logger;
pub mod ui;
pub mod utils;

use clap::error::ErrorKind;
use log::debug;
use std::ffi::OsString;

use crate::cli::{parse_args, Cli, Commands};
use crate::commands::clean::{run_clean, CleanOptions};
use crate::commands::error_msg;
use crate::commands::inspect::{run_inspect, InspectOptions};
use crate::commands::widgets_only::{run_widgets_only, WidgetsOnlyOptions};
use crate::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage errors, missing files and failed reads, parses or writes.
pub const EXIT_FAILURE: i32 = 1;

/// Runs nbclean with `args` (program name first) and returns the process exit code.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(err) => return report_usage(err),
    };

    logger::init_logger(logger::level_for_flags(cli.quiet, cli.debug));
    debug!("nbclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(map) => map,
        Err(err) => {
            error_msg(format!("Error: {err:#}"), &ThemeStyle::default_theme_map());
            return EXIT_FAILURE;
        }
    };

    match dispatch(&cli, &theme_map) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            error_msg(format!("Error: {err:#}"), &theme_map);
            EXIT_FAILURE
        }
    }
}

fn dispatch(cli: &Cli, theme_map: &ThemeMap) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Clean(cmd) => {
            let opts = CleanOptions {
                notebook: cmd.notebook.clone(),
                diff: cmd.diff,
                quiet: cli.quiet,
            };
            run_clean(&opts, theme_map).map(|_| ())
        }
        Commands::WidgetsOnly(cmd) => {
            let opts = WidgetsOnlyOptions {
                notebook: cmd.notebook.clone(),
                diff: cmd.diff,
                quiet: cli.quiet,
            };
            run_widgets_only(&opts, theme_map).map(|_| ())
        }
        Commands::Inspect(cmd) => {
            let opts = InspectOptions {
                notebook: cmd.notebook.clone(),
                mode: cmd.mode,
                json: cmd.json,
                quiet: cli.quiet,
            };
            run_inspect(&opts, theme_map).map(|_| ())
        }
    }
}

/// Prints a clap error; help and version requests succeed, everything else is a usage error.
fn report_usage(err: clap::Error) -> i32 {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}
