// nbclean/src/ui/report.rs
//! Rendering of widget removal reports: a per-level summary and a per-site table.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use std::io::Write;

use nbclean_core::{CleanReport, WidgetSite};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Prints how many `widgets` keys were removed at each level.
pub fn print_summary<W: Write>(
    report: &CleanReport,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    writeln!(
        writer,
        "{}",
        styled("--- Widget Removal Summary ---", ThemeEntry::Header, theme_map, enable_colors)
    )?;

    if report.is_empty() {
        writeln!(writer, "No widget metadata found.")?;
        return Ok(());
    }

    for (level, count) in report.counts_by_level() {
        if count == 0 {
            continue;
        }
        writeln!(
            writer,
            "{} ({} removed)",
            styled(level, ThemeEntry::SummarySite, theme_map, enable_colors),
            styled(&count.to_string(), ThemeEntry::SummaryCount, theme_map, enable_colors),
        )?;
    }
    Ok(())
}

/// Builds a table with one row per widget site.
pub fn site_table(report: &CleanReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Level", "Cell", "Output", "Location"]);

    for site in report {
        let (cell, output) = match *site {
            WidgetSite::Notebook => (String::from("-"), String::from("-")),
            WidgetSite::Cell { cell } => (cell.to_string(), String::from("-")),
            WidgetSite::Output { cell, output } => (cell.to_string(), output.to_string()),
        };
        table.add_row(vec![site.level().to_string(), cell, output, site.json_pointer()]);
    }
    table
}
