//! `nbclean inspect`: report widget metadata locations without writing anything.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use nbclean_core::{find_widgets, parse_notebook, CleanMode, CleanReport};

use crate::commands::info_msg;
use crate::ui::report;
use crate::ui::theme::ThemeMap;
use crate::utils::files::NotebookFile;

pub struct InspectOptions {
    pub notebook: PathBuf,
    pub mode: CleanMode,
    pub json: bool,
    pub quiet: bool,
}

/// Prints the widget sites of `opts.notebook` to stdout and returns them.
pub fn run_inspect(opts: &InspectOptions, theme_map: &ThemeMap) -> Result<CleanReport> {
    let path = opts.notebook.as_path();
    info!("Inspecting {} ({} mode).", path.display(), opts.mode);

    let file = NotebookFile::read(path)?;
    let document = parse_notebook(&file.text)
        .with_context(|| format!("Failed to parse notebook {}", path.display()))?;
    let found = find_widgets(&document, opts.mode)
        .with_context(|| format!("Failed to inspect notebook {}", path.display()))?;

    let mut stdout = io::stdout().lock();
    if opts.json {
        let json = serde_json::to_string_pretty(&found).context("Failed to serialize report")?;
        writeln!(stdout, "{json}")?;
    } else if found.is_empty() {
        if !opts.quiet {
            info_msg(format!("No widget metadata found in {}.", path.display()), theme_map);
        }
    } else {
        writeln!(stdout, "{}", report::site_table(&found))?;
    }

    Ok(found)
}
