// nbclean/src/errors.rs
//! Error conditions raised by the CLI layer itself.
//!
//! Failures from `nbclean-core` and the filesystem travel as `anyhow::Error`
//! with context attached, and argument errors stay `clap::Error`; these are
//! the cases the CLI detects on its own.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
