// nbclean/src/ui/diff_viewer.rs
//! Unified diff between the notebook as read and as it will be written.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use std::io::Write;

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a unified diff of `original` -> `cleaned` to `writer`.
///
/// `original_label` and `cleaned_label` name the two sides in the `---`/`+++` header.
pub fn print_diff<W: Write>(
    original: &str,
    cleaned: &str,
    original_label: &str,
    cleaned_label: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let patch = create_patch(original, cleaned);

    if patch.hunks().is_empty() {
        writeln!(writer, "No changes.")?;
        return Ok(());
    }

    let header = |text: String| styled(&text, ThemeEntry::DiffHeader, theme_map, enable_colors);
    writeln!(writer, "{}", header(format!("--- {original_label}")))?;
    writeln!(writer, "{}", header(format!("+++ {cleaned_label}")))?;

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        writeln!(
            writer,
            "{}",
            header(format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len()))
        )?;

        for line_change in hunk.lines() {
            let (marker, text, entry) = match line_change {
                DiffLine::Delete(s) => ("-", *s, Some(ThemeEntry::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(ThemeEntry::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            let body = text.strip_suffix('\n').unwrap_or(text);
            let rendered = format!("{marker}{body}");
            match entry {
                Some(entry) => writeln!(writer, "{}", styled(&rendered, entry, theme_map, enable_colors))?,
                None => writeln!(writer, "{rendered}")?,
            }
            if !text.ends_with('\n') {
                writeln!(writer, "\\ No newline at end of file")?;
            }
        }
    }

    Ok(())
}
