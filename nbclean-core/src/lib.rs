// nbclean-core/src/lib.rs
//! # nbclean Core Library
//!
//! `nbclean-core` removes embedded ipywidgets state (the `widgets` metadata key)
//! from Jupyter notebooks. Notebook viewers that cannot render widget state,
//! GitHub's among them, fail on notebooks that still carry it.
//!
//! The library is pure: it works on an in-memory JSON tree and never touches
//! the filesystem. Reading, backing up and writing files is left to the caller
//! (see the `nbclean` CLI crate).
//!
//! ## Modules
//!
//! * `config`: Constants for the keys and file suffixes, and [`CleanMode`].
//! * `sanitizer`: [`sanitize`] and [`find_widgets`], the actual cleaning pass.
//! * `report`: [`WidgetSite`] and [`CleanReport`], typed locations of widget state.
//! * `notebook`: Parsing, notebook-style serialization and derived file paths.
//! * `headless`: [`clean_notebook_str`], a one-shot text-to-text helper.
//! * `errors`: [`NotebookError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use nbclean_core::{clean_notebook_str, CleanMode, WidgetSite};
//!
//! let input = r#"{"metadata": {"widgets": {"state": {}}}, "cells": []}"#;
//! let (cleaned, report) = clean_notebook_str(input, CleanMode::Full)?;
//!
//! assert_eq!(report.sites(), &[WidgetSite::Notebook]);
//! assert_eq!(cleaned, "{\n \"metadata\": {},\n \"cells\": []\n}");
//! # Ok::<(), nbclean_core::NotebookError>(())
//! ```
//!
//! ## Cleaning Modes
//!
//! * [`CleanMode::Full`] visits notebook metadata, each cell's metadata and each
//!   output's metadata.
//! * [`CleanMode::Conservative`] visits notebook and cell metadata only; outputs
//!   are neither inspected nor modified.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod headless;
pub mod notebook;
pub mod report;
pub mod sanitizer;

pub use config::{CleanMode, ParseCleanModeError, WIDGETS_KEY};

pub use errors::{NotebookError, Result};

pub use report::{CleanReport, WidgetSite};

pub use sanitizer::{find_widgets, sanitize, take_widgets, Sanitized};

pub use notebook::{backup_path, cleaned_path, parse_notebook, to_notebook_string};

pub use headless::clean_notebook_str;
