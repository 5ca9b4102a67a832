// nbclean-core/src/notebook.rs
//! Reading and writing notebook JSON, and the file names derived from a notebook path.
//!
//! Notebooks are written the way Jupyter tooling commonly writes them: a
//! one-space indent, `": "` between keys and values, non-ASCII text kept as
//! is, and no trailing newline.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{BACKUP_SUFFIX, CLEANED_SUFFIX, INDENT, NOTEBOOK_EXTENSION};
use crate::errors::{NotebookError, Result};

/// Parses notebook text into a JSON tree, keeping key order and number text.
pub fn parse_notebook(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(NotebookError::Parse)
}

/// Serializes a notebook with a single-space indent.
pub fn to_notebook_string(document: &Value) -> Result<String> {
    let mut buf = Vec::with_capacity(4096);
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut ser).map_err(NotebookError::Serialize)?;
    // serde_json only emits UTF-8, so this cannot fail for a `Value`.
    String::from_utf8(buf).map_err(|e| NotebookError::Serialize(serde_json::Error::custom(e)))
}

/// `<path>.backup`: the suffix is appended to the full file name.
pub fn backup_path(path: &Path) -> PathBuf {
    append_to_file_name(path, BACKUP_SUFFIX)
}

/// The conservative-mode output path.
///
/// A trailing `.ipynb` becomes `_cleaned.ipynb` (`a/b.ipynb` -> `a/b_cleaned.ipynb`).
/// Paths without that suffix get `_cleaned.ipynb` appended so the result never
/// names the input file. Names that are not valid UTF-8 keep their exact bytes.
pub fn cleaned_path(path: &Path) -> PathBuf {
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if ext == NOTEBOOK_EXTENSION => {
            let mut name: OsString = stem.to_owned();
            name.push(CLEANED_SUFFIX);
            path.with_file_name(name)
        }
        _ => append_to_file_name(path, CLEANED_SUFFIX),
    }
}

fn append_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}
