//! `nbclean widgets-only`: conservative cleaning into a sibling file.
//!
//! Only notebook and cell metadata are cleaned; outputs are copied through as
//! they are. The original file is never written. The command prints the `mv`
//! that would replace it but does not run it.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nbclean_core::{clean_notebook_str, cleaned_path, find_widgets, parse_notebook, CleanMode, WidgetSite};

use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::diff_viewer;
use crate::ui::report;
use crate::ui::theme::ThemeMap;
use crate::utils::files::{write_atomic, NotebookFile};

pub struct WidgetsOnlyOptions {
    pub notebook: PathBuf,
    pub diff: bool,
    pub quiet: bool,
}

/// Writes the conservatively cleaned copy and returns its path.
pub fn run_widgets_only(opts: &WidgetsOnlyOptions, theme_map: &ThemeMap) -> Result<PathBuf> {
    let path = opts.notebook.as_path();
    info!("Starting widgets-only operation on {}.", path.display());

    let original = NotebookFile::read(path)?;
    let (cleaned_text, removed) = clean_notebook_str(&original.text, CleanMode::Conservative)
        .with_context(|| format!("Failed to clean notebook {}", path.display()))?;

    if !opts.quiet {
        for site in &removed {
            match site {
                WidgetSite::Notebook => info_msg("Removing notebook-level widget metadata", theme_map),
                WidgetSite::Cell { cell } => {
                    info_msg(format!("Removing widget metadata from cell {cell}"), theme_map)
                }
                WidgetSite::Output { .. } => {}
            }
        }
    }

    let output_path = cleaned_path(path);
    write_atomic(&output_path, cleaned_text.as_bytes())
        .with_context(|| format!("Failed to write cleaned notebook {}", output_path.display()))?;

    if !opts.quiet {
        success_msg(format!("Cleaned notebook saved as: {}", output_path.display()), theme_map);
        info_msg(format!("Original notebook unchanged: {}", path.display()), theme_map);

        let remaining = remaining_output_sites(&cleaned_text);
        if remaining > 0 {
            warn_msg(
                format!("{remaining} output(s) still carry widget metadata; `nbclean clean` removes those too."),
                theme_map,
            );
        }
    }

    if opts.diff {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        diff_viewer::print_diff(
            &original.text,
            &cleaned_text,
            &path.display().to_string(),
            &output_path.display().to_string(),
            &mut stdout.lock(),
            theme_map,
            supports_color,
        )?;
    }

    if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        report::print_summary(&removed, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\nTo use the cleaned version:")?;
    writeln!(stdout, "{}", rename_hint(&output_path, path))?;

    info!("Widgets-only operation completed: {} widget site(s) removed.", removed.len());
    Ok(output_path)
}

/// Counts output-level widget sites left in the cleaned text.
fn remaining_output_sites(cleaned_text: &str) -> usize {
    parse_notebook(cleaned_text)
        .and_then(|doc| find_widgets(&doc, CleanMode::Full))
        .map(|found| found.len())
        .unwrap_or(0)
}

/// The shell command that replaces `original` with `cleaned`.
pub fn rename_hint(cleaned: &Path, original: &Path) -> String {
    format!(
        "mv {} {}",
        shell_quote(&cleaned.display().to_string()),
        shell_quote(&original.display().to_string())
    )
}

fn shell_quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ':' | ',' | '@' | '%'));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
