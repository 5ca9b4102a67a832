// nbclean/src/utils/files.rs
//! Reading notebooks and replacing files without leaving them half-written.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const MAX_LINK_HOPS: usize = 40;

/// A notebook's exact contents as UTF-8 text.
pub struct NotebookFile {
    pub text: String,
}

impl NotebookFile {
    /// Reads `path` fully; the file must be valid UTF-8.
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("Failed to read notebook {}", path.display()))?;
        let text = String::from_utf8(raw)
            .with_context(|| format!("Notebook {} is not valid UTF-8", path.display()))?;
        Ok(Self { text })
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Replaces the contents of `path` atomically.
///
/// The bytes go to a uniquely named temporary file in the destination's
/// directory, which is then persisted over the destination. Symlinks are
/// written through, so the link stays a link and its target is replaced. An
/// existing destination's permissions carry over to the new file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dest = resolve_destination(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.flush())
        .and_then(|_| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;

    match fs::metadata(&dest) {
        Ok(meta) => fs::set_permissions(tmp.path(), meta.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", dest.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read metadata of {}", dest.display()))
        }
    }

    // Dropping the error's temp file removes it.
    tmp.persist(&dest)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to replace {}", dest.display()))?;
    Ok(())
}

/// Follows symlinks from `path` to the file that should actually be replaced.
/// A dangling link resolves to the path it points at.
fn resolve_destination(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_LINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let target = fs::read_link(&current)?;
                current = match current.parent() {
                    Some(parent) if target.is_relative() => parent.join(target),
                    _ => target,
                };
            }
            Ok(_) => return Ok(current),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(current),
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::other(format!(
        "too many levels of symbolic links at {}",
        path.display()
    )))
}
