// nbclean-core/tests/sanitize_tests.rs
use anyhow::Result;
use serde_json::{json, Value};
use test_log::test;

use nbclean_core::{
    clean_notebook_str, find_widgets, parse_notebook, sanitize, to_notebook_string, CleanMode,
    NotebookError, WidgetSite,
};

/// A notebook shaped like real Jupyter output, with widget state at every level.
const WIDGET_NOTEBOOK: &str = r###"{
 "cells": [
  {
   "cell_type": "code",
   "execution_count": 1,
   "metadata": {
    "scrolled": true,
    "widgets": {"application/vnd.jupyter.widget-state+json": {}}
   },
   "outputs": [
    {
     "data": {"text/plain": ["FloatProgress(value=0.0)"]},
     "metadata": {"widgets": {"model_id": "abc"}},
     "output_type": "display_data"
    },
    {
     "name": "stdout",
     "output_type": "stream",
     "text": ["naïve café ✓\n"]
    }
   ],
   "source": ["from tqdm.auto import tqdm"]
  },
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": ["## Résumé"]
  }
 ],
 "metadata": {
  "kernelspec": {"display_name": "Python 3", "language": "python", "name": "python3"},
  "widgets": {"application/vnd.jupyter.widget-state+json": {"state": {}, "version_major": 2}}
 },
 "nbformat": 4,
 "nbformat_minor": 5
}"###;

fn contains_widgets(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.contains_key("widgets") || map.values().any(contains_widgets),
        Value::Array(items) => items.iter().any(contains_widgets),
        _ => false,
    }
}

#[test]
fn scenario_full_mode_empties_all_three_levels() -> Result<()> {
    let input = json!({
        "metadata": {"widgets": {"x": 1}},
        "cells": [{"metadata": {"widgets": {}}, "outputs": [{"metadata": {"widgets": {}}}]}]
    });

    let cleaned = sanitize(input, CleanMode::Full)?;

    assert_eq!(
        cleaned.document,
        json!({"metadata": {}, "cells": [{"metadata": {}, "outputs": [{"metadata": {}}]}]})
    );
    Ok(())
}

#[test]
fn selective_deletion_depends_on_mode() -> Result<()> {
    let doc = parse_notebook(WIDGET_NOTEBOOK)?;

    let full = sanitize(doc.clone(), CleanMode::Full)?;
    assert_eq!(
        full.report.sites(),
        &[
            WidgetSite::Notebook,
            WidgetSite::Cell { cell: 0 },
            WidgetSite::Output { cell: 0, output: 0 },
        ]
    );
    assert!(!contains_widgets(&full.document));

    let conservative = sanitize(doc, CleanMode::Conservative)?;
    assert_eq!(
        conservative.report.sites(),
        &[WidgetSite::Notebook, WidgetSite::Cell { cell: 0 }]
    );
    assert_eq!(
        conservative.document["cells"][0]["outputs"][0]["metadata"],
        json!({"widgets": {"model_id": "abc"}})
    );
    assert!(conservative.document["metadata"].get("widgets").is_none());
    assert!(conservative.document["cells"][0]["metadata"].get("widgets").is_none());
    Ok(())
}

#[test]
fn full_mode_is_idempotent_on_text() -> Result<()> {
    let (first, first_report) = clean_notebook_str(WIDGET_NOTEBOOK, CleanMode::Full)?;
    let (second, second_report) = clean_notebook_str(&first, CleanMode::Full)?;

    assert_eq!(first_report.len(), 3);
    assert!(second_report.is_empty());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn documents_without_widgets_are_preserved() -> Result<()> {
    let doc = json!({
        "metadata": {"kernelspec": {"name": "python3"}, "language_info": {"version": "3.11.4"}},
        "cells": [
            {"cell_type": "code", "metadata": {"tags": []}, "outputs": [{"output_type": "stream", "text": ["1\n"]}]},
            {"cell_type": "raw", "source": "no metadata at all"}
        ],
        "nbformat": 4
    });

    for mode in [CleanMode::Full, CleanMode::Conservative] {
        let cleaned = sanitize(doc.clone(), mode)?;
        assert!(!cleaned.changed());
        assert_eq!(cleaned.document, doc);
    }
    Ok(())
}

#[test]
fn key_order_and_content_survive_a_round_trip() -> Result<()> {
    let (cleaned, _) = clean_notebook_str(WIDGET_NOTEBOOK, CleanMode::Full)?;
    let doc = parse_notebook(&cleaned)?;

    let top: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(top, vec!["cells", "metadata", "nbformat", "nbformat_minor"]);

    let cell: Vec<&str> = doc["cells"][0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(cell, vec!["cell_type", "execution_count", "metadata", "outputs", "source"]);

    assert_eq!(doc["cells"][0]["metadata"], json!({"scrolled": true}));
    assert!(cleaned.contains("naïve café ✓"));
    assert!(cleaned.contains("## Résumé"));
    Ok(())
}

#[test]
fn missing_cells_are_treated_as_empty() -> Result<()> {
    let report = find_widgets(&json!({"metadata": {"widgets": null}}), CleanMode::Full)?;
    assert_eq!(report.sites(), &[WidgetSite::Notebook]);
    Ok(())
}

#[test]
fn malformed_shapes_are_rejected() {
    let cases = [
        (json!("just a string"), ""),
        (json!({"cells": {"0": {}}}), "/cells"),
        (json!({"cells": null}), "/cells"),
        (json!({"cells": [{"outputs": [{}, []]}]}), "/cells/0/outputs/1"),
    ];

    for (doc, expected_path) in cases {
        match sanitize(doc, CleanMode::Full) {
            Err(NotebookError::MalformedDocument { path, .. }) => assert_eq!(path, expected_path),
            other => panic!("expected MalformedDocument at '{expected_path}', got {other:?}"),
        }
    }
}

#[test]
fn find_widgets_does_not_modify() -> Result<()> {
    let doc = parse_notebook(WIDGET_NOTEBOOK)?;
    let before = to_notebook_string(&doc)?;

    let report = find_widgets(&doc, CleanMode::Full)?;

    assert_eq!(report.len(), 3);
    assert_eq!(to_notebook_string(&doc)?, before);
    Ok(())
}
