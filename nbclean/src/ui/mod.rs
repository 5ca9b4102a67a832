//! Terminal presentation: themes, message formatting, diffs and removal reports.

pub mod diff_viewer;
pub mod output_format;
pub mod report;
pub mod theme;
