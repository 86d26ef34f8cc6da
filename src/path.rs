//! Path truncation for display.
//!
//! Shortens file paths under a base directory to `...<remainder>`, e.g.
//! `/home/me/project/src/lib.rs` under `/home/me/project` becomes
//! `.../src/lib.rs`.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Make `path` absolute and lexically normalize it.
///
/// Relative paths are joined to the current directory. `.` components are
/// dropped and `..` removes the previous component; symlinks are not
/// resolved and the path does not need to exist.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(Error::CurrentDir)?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Truncate `file` to be relative to `base` for display.
///
/// Returns the absolute file path unchanged when it equals `base` or is not
/// inside it. Otherwise returns `...` followed by the part of the absolute
/// file path after the absolute base path.
pub fn truncate_path(base: impl AsRef<Path>, file: impl AsRef<Path>) -> Result<String> {
    let full_base = absolute(base.as_ref())?;
    let full_file = absolute(file.as_ref())?;
    let file_str = full_file.to_string_lossy();

    if full_base == full_file || !full_file.starts_with(&full_base) {
        return Ok(file_str.into_owned());
    }

    let base_len = full_base.as_os_str().to_string_lossy().len();
    Ok(format!("...{}", &file_str[base_len..]))
}

/// Write each file truncated to `base`, one per line.
pub fn write_files<W, P>(out: &mut W, base: impl AsRef<Path>, files: &[P]) -> Result<()>
where
    W: Write,
    P: AsRef<Path>,
{
    for file in files {
        writeln!(out, "{}", truncate_path(base.as_ref(), file)?)?;
    }
    Ok(())
}

/// Print each file truncated to `base` on stdout.
pub fn print_files<P: AsRef<Path>>(base: impl AsRef<Path>, files: &[P]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_files(&mut stdout, base, files)
}
