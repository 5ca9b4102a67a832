// nbclean-core/src/sanitizer.rs
//! The notebook sanitizer: locates and removes `widgets` metadata.
//!
//! Cleaning happens in two steps. [`find_widgets`] walks the document, checks
//! the shape of the levels it visits and returns the [`WidgetSite`]s present.
//! [`sanitize`] then takes ownership of the document, removes the key at each of
//! those sites and hands back the cleaned document with its report.
//!
//! The walk only looks at what it needs: a missing `metadata`, `cells` or
//! `outputs` is simply skipped, and a `metadata` value that is not an object
//! cannot hold widget state, so it is left as is. Everything else in the
//! document (cell sources, outputs data, sibling metadata keys and their order)
//! is carried through untouched.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde_json::{Map, Value};

use crate::config::{CleanMode, CELLS_KEY, METADATA_KEY, OUTPUTS_KEY, WIDGETS_KEY};
use crate::errors::{NotebookError, Result};
use crate::report::{CleanReport, WidgetSite};

/// A cleaned document together with the sites that were removed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    pub document: Value,
    pub report: CleanReport,
}

impl Sanitized {
    /// True when at least one `widgets` key was removed.
    pub fn changed(&self) -> bool {
        !self.report.is_empty()
    }
}

/// Removes `widgets` metadata from `document` at the levels selected by `mode`.
///
/// Absent keys are not an error, so running this twice is the same as running
/// it once. Fails with [`NotebookError::MalformedDocument`] when the document is
/// not an object, or when `cells` (or, in [`CleanMode::Full`], a cell's
/// `outputs`) is present but is not an array of objects.
pub fn sanitize(mut document: Value, mode: CleanMode) -> Result<Sanitized> {
    let found = find_widgets(&document, mode)?;
    let mut report = CleanReport::new();

    for site in &found {
        let removed = metadata_mut(&mut document, site).and_then(take_widgets);
        if removed.is_some() {
            debug!("Removed widget state from {} ({})", site, site.json_pointer());
            report.push(*site);
        }
    }

    debug!(
        "Sanitized notebook in {} mode: {} widget site(s) removed.",
        mode,
        report.len()
    );
    Ok(Sanitized { document, report })
}

/// Reports the sites [`sanitize`] would remove for `mode`, without modifying anything.
pub fn find_widgets(document: &Value, mode: CleanMode) -> Result<CleanReport> {
    let root = document.as_object().ok_or_else(|| {
        NotebookError::malformed(
            "",
            format!("expected a JSON object at the top level, found {}", kind_of(document)),
        )
    })?;

    let mut report = CleanReport::new();

    if has_widgets(root) {
        report.push(WidgetSite::Notebook);
    }

    for (cell_idx, cell) in objects_in(root, CELLS_KEY, &format!("/{CELLS_KEY}"))? {
        if has_widgets(cell) {
            report.push(WidgetSite::Cell { cell: cell_idx });
        }

        if !mode.cleans_outputs() {
            continue;
        }

        let outputs_path = format!("/{CELLS_KEY}/{cell_idx}/{OUTPUTS_KEY}");
        for (output_idx, output) in objects_in(cell, OUTPUTS_KEY, &outputs_path)? {
            if has_widgets(output) {
                report.push(WidgetSite::Output {
                    cell: cell_idx,
                    output: output_idx,
                });
            }
        }
    }

    Ok(report)
}

/// Removes the `widgets` key from a metadata object, returning its former value.
///
/// Sibling keys keep their relative order.
pub fn take_widgets(metadata: &mut Map<String, Value>) -> Option<Value> {
    metadata.shift_remove(WIDGETS_KEY)
}

/// Whether `container.metadata` is an object holding a `widgets` key.
fn has_widgets(container: &Map<String, Value>) -> bool {
    container
        .get(METADATA_KEY)
        .and_then(Value::as_object)
        .is_some_and(|metadata| metadata.contains_key(WIDGETS_KEY))
}

/// Yields `(index, object)` for each element of the array under `key`.
///
/// A missing key yields nothing; anything other than an array of objects is malformed.
fn objects_in<'a>(
    container: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<(usize, &'a Map<String, Value>)>> {
    let Some(value) = container.get(key) else {
        return Ok(Vec::new());
    };

    let items = value.as_array().ok_or_else(|| {
        NotebookError::malformed(path, format!("expected an array, found {}", kind_of(value)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_object().map(|obj| (idx, obj)).ok_or_else(|| {
                NotebookError::malformed(
                    format!("{path}/{idx}"),
                    format!("expected an object, found {}", kind_of(item)),
                )
            })
        })
        .collect()
}

fn metadata_mut<'a>(document: &'a mut Value, site: &WidgetSite) -> Option<&'a mut Map<String, Value>> {
    let container = match *site {
        WidgetSite::Notebook => document,
        WidgetSite::Cell { cell } => document.get_mut(CELLS_KEY)?.get_mut(cell)?,
        WidgetSite::Output { cell, output } => document
            .get_mut(CELLS_KEY)?
            .get_mut(cell)?
            .get_mut(OUTPUTS_KEY)?
            .get_mut(output)?,
    };
    container.get_mut(METADATA_KEY)?.as_object_mut()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
