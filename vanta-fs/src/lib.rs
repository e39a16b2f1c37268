//! Filesystem access for the `vanta` command line, built on `cap-std` and
//! `camino`.
//!
//! Request files are read and result files written through capability
//! handles on their parent directory. Paths must be UTF-8.
#![forbid(unsafe_code)]

use std::io;
use std::path::{Component, MAIN_SEPARATOR};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` names an existing regular file.
///
/// A missing entry surfaces as [`io::ErrorKind::NotFound`] rather than
/// `false`.
///
/// # Errors
/// Returns the underlying I/O error when the parent directory cannot be
/// opened or the entry cannot be inspected.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create (or truncate) a file for writing, creating missing parent
/// directories first.
///
/// # Errors
/// Returns the underlying I/O error when a directory or the file cannot be
/// created.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    create_parent_dirs(path)?;
    let (dir, name) = parent_and_name(path)?;
    dir.create(name.as_str())
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Returns the underlying I/O error when a directory cannot be created.
pub fn create_parent_dirs(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (anchor, relative) = anchor_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Open the directory holding `path` and return it with the file name.
fn parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an ambient anchor directory and a path relative to it.
///
/// cap-std refuses absolute paths below a `Dir`, so absolute paths are
/// anchored at their root (or Windows prefix) and relative paths at `.`.
fn anchor_and_relative(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let anchor = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(format!("{prefix}{MAIN_SEPARATOR}"))
        }
        Some(Component::RootDir) => Utf8PathBuf::from(MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if anchor == Utf8Path::new(".") {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&anchor)
            .map_err(|_| io::Error::other(format!("cannot anchor {dir} at {anchor}")))?
            .to_path_buf()
    };
    let handle = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((handle, relative))
}
