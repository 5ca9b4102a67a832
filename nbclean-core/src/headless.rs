// nbclean-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for cleaning notebook text in one call, without any file I/O.

use crate::config::CleanMode;
use crate::errors::Result;
use crate::notebook::{parse_notebook, to_notebook_string};
use crate::report::CleanReport;
use crate::sanitizer::sanitize;

/// Parses `content`, removes widget metadata according to `mode` and serializes
/// the result in notebook formatting.
///
/// # Arguments
///
/// * `content` - The notebook JSON text.
/// * `mode` - Which levels to clean.
pub fn clean_notebook_str(content: &str, mode: CleanMode) -> Result<(String, CleanReport)> {
    let document = parse_notebook(content)?;
    let cleaned = sanitize(document, mode)?;
    let text = to_notebook_string(&cleaned.document)?;
    Ok((text, cleaned.report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NotebookError;
    use anyhow::Result;

    #[test]
    fn test_clean_notebook_str_full() -> Result<()> {
        let content = r#"{"metadata": {"widgets": {"x": 1}}, "cells": [{"metadata": {"widgets": {}}, "outputs": [{"metadata": {"widgets": {}}}]}]}"#;

        let (cleaned, report) = clean_notebook_str(content, CleanMode::Full)?;

        let expected = "{\n \"metadata\": {},\n \"cells\": [\n  {\n   \"metadata\": {},\n   \"outputs\": [\n    {\n     \"metadata\": {}\n    }\n   ]\n  }\n ]\n}";
        assert_eq!(cleaned, expected);
        assert_eq!(report.len(), 3);
        Ok(())
    }

    #[test]
    fn test_clean_notebook_str_rejects_non_object() {
        let result = clean_notebook_str("[]", CleanMode::Conservative);
        assert!(matches!(result, Err(NotebookError::MalformedDocument { .. })));
    }
}
