// nbclean-core/src/report.rs
//! Data structures describing where widget state was found or removed.
//!
//! A [`WidgetSite`] is a typed address of one `widgets` key; a [`CleanReport`]
//! is the ordered list of sites touched by one pass over a notebook.

use serde::Serialize;
use std::fmt;

use crate::config::{CELLS_KEY, METADATA_KEY, OUTPUTS_KEY, WIDGETS_KEY};

/// The location of a `widgets` key inside a notebook.
///
/// Indices are zero-based positions in `cells` and `cells[i].outputs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum WidgetSite {
    /// Top-level `metadata.widgets`.
    Notebook,
    /// `cells[cell].metadata.widgets`.
    Cell { cell: usize },
    /// `cells[cell].outputs[output].metadata.widgets`.
    Output { cell: usize, output: usize },
}

impl WidgetSite {
    /// Renders the site as an RFC 6901 JSON pointer.
    pub fn json_pointer(&self) -> String {
        match self {
            WidgetSite::Notebook => format!("/{METADATA_KEY}/{WIDGETS_KEY}"),
            WidgetSite::Cell { cell } => {
                format!("/{CELLS_KEY}/{cell}/{METADATA_KEY}/{WIDGETS_KEY}")
            }
            WidgetSite::Output { cell, output } => format!(
                "/{CELLS_KEY}/{cell}/{OUTPUTS_KEY}/{output}/{METADATA_KEY}/{WIDGETS_KEY}"
            ),
        }
    }

    /// Short level name used in summaries ("notebook", "cell", "output").
    pub fn level(&self) -> &'static str {
        match self {
            WidgetSite::Notebook => "notebook",
            WidgetSite::Cell { .. } => "cell",
            WidgetSite::Output { .. } => "output",
        }
    }
}

impl fmt::Display for WidgetSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetSite::Notebook => write!(f, "notebook metadata"),
            WidgetSite::Cell { cell } => write!(f, "cell {cell} metadata"),
            WidgetSite::Output { cell, output } => {
                write!(f, "cell {cell} output {output} metadata")
            }
        }
    }
}

/// Ordered record of the widget sites visited by a single pass.
///
/// Sites appear in document order: the notebook first, then for each cell its
/// own metadata followed by its outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CleanReport {
    sites: Vec<WidgetSite>,
}

impl CleanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, site: WidgetSite) {
        self.sites.push(site);
    }

    pub fn sites(&self) -> &[WidgetSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn contains(&self, site: &WidgetSite) -> bool {
        self.sites.contains(site)
    }

    /// True when the top-level notebook metadata carried widget state.
    pub fn has_notebook_widgets(&self) -> bool {
        self.contains(&WidgetSite::Notebook)
    }

    /// Number of sites per level, in the order notebook, cell, output.
    pub fn counts_by_level(&self) -> [(&'static str, usize); 3] {
        let mut counts = [("notebook", 0), ("cell", 0), ("output", 0)];
        for site in &self.sites {
            let idx = match site {
                WidgetSite::Notebook => 0,
                WidgetSite::Cell { .. } => 1,
                WidgetSite::Output { .. } => 2,
            };
            counts[idx].1 += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a CleanReport {
    type Item = &'a WidgetSite;
    type IntoIter = std::slice::Iter<'a, WidgetSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
