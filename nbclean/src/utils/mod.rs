//! Filesystem helpers used by the commands.

pub mod files;
