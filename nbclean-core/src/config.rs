//! Configuration constants and the cleaning mode for `nbclean-core`.
//!
//! Cleaning is deliberately not rule-driven: the only knob is which levels of
//! the notebook tree are visited, expressed by [`CleanMode`].
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

/// The metadata key holding embedded ipywidgets state.
pub const WIDGETS_KEY: &str = "widgets";

/// Top-level and per-cell/per-output metadata key.
pub const METADATA_KEY: &str = "metadata";

pub const CELLS_KEY: &str = "cells";

pub const OUTPUTS_KEY: &str = "outputs";

/// Suffix appended to the full file name when backing up before an in-place rewrite.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Extension (without the dot) replaced when deriving the conservative-mode output path.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Replaces `.ipynb` in the conservative-mode output path.
pub const CLEANED_SUFFIX: &str = "_cleaned.ipynb";

/// Indentation used when writing notebooks (one space per level).
pub const INDENT: &[u8] = b" ";

/// Selects which levels of the notebook are cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CleanMode {
    /// Notebook metadata, every cell's metadata and every output's metadata.
    #[default]
    Full,
    /// Notebook metadata and every cell's metadata; outputs are never inspected.
    Conservative,
}

impl CleanMode {
    /// Whether output metadata is visited in this mode.
    pub fn cleans_outputs(self) -> bool {
        matches!(self, CleanMode::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CleanMode::Full => "full",
            CleanMode::Conservative => "conservative",
        }
    }
}

impl fmt::Display for CleanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an unknown `CleanMode` name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCleanModeError(String);

impl fmt::Display for ParseCleanModeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid clean mode '{}'; expected 'full' or 'conservative'.", self.0)
    }
}

impl std::error::Error for ParseCleanModeError {}

impl FromStr for CleanMode {
    type Err = ParseCleanModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(CleanMode::Full),
            "conservative" | "widgets-only" => Ok(CleanMode::Conservative),
            _ => Err(ParseCleanModeError(s.to_string())),
        }
    }
}
