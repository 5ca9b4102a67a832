//! `nbclean clean`: full cleaning, rewriting the notebook in place.
//!
//! The notebook is read and cleaned entirely in memory first. Only then is the
//! untouched original copied to `<path>.backup` and the cleaned text written
//! over `<path>`, so a parse failure never leaves anything on disk.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::path::PathBuf;

use nbclean_core::{backup_path, clean_notebook_str, CleanMode, CleanReport};

use crate::commands::{info_msg, success_msg};
use crate::errors::CliError;
use crate::ui::diff_viewer;
use crate::ui::report;
use crate::ui::theme::ThemeMap;
use crate::utils::files::{write_atomic, NotebookFile};

pub struct CleanOptions {
    pub notebook: PathBuf,
    pub diff: bool,
    pub quiet: bool,
}

/// Cleans `opts.notebook` in place and returns what was removed.
pub fn run_clean(opts: &CleanOptions, theme_map: &ThemeMap) -> Result<CleanReport> {
    let path = opts.notebook.as_path();
    info!("Starting clean operation on {}.", path.display());

    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()).into());
    }

    let original = NotebookFile::read(path)?;
    let (cleaned_text, removed) = clean_notebook_str(&original.text, CleanMode::Full)
        .with_context(|| format!("Failed to clean notebook {}", path.display()))?;

    if removed.has_notebook_widgets() && !opts.quiet {
        info_msg(format!("Removing widget metadata from notebook: {}", path.display()), theme_map);
    }

    let backup = backup_path(path);
    write_atomic(&backup, original.bytes())
        .with_context(|| format!("Failed to create backup {}", backup.display()))?;
    debug!("Backup of {} bytes written to {}.", original.bytes().len(), backup.display());
    if !opts.quiet {
        info_msg(format!("Created backup: {}", backup.display()), theme_map);
    }

    write_atomic(path, cleaned_text.as_bytes())
        .with_context(|| format!("Failed to write cleaned notebook {}", path.display()))?;
    if !opts.quiet {
        success_msg(format!("Cleaned notebook saved: {}", path.display()), theme_map);
    }

    if opts.diff {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        diff_viewer::print_diff(
            &original.text,
            &cleaned_text,
            &backup.display().to_string(),
            &path.display().to_string(),
            &mut stdout.lock(),
            theme_map,
            supports_color,
        )?;
    }

    if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        report::print_summary(&removed, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }

    info!("Clean operation completed: {} widget site(s) removed.", removed.len());
    Ok(removed)
}
