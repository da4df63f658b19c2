// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic file replacement.
//!
//! Content is written to a temporary file in the destination directory and
//! renamed over the destination while an exclusive lock is held on a
//! sibling `<name>.lock` file. Readers see either the old or the new file,
//! never a partial write. The lock file is removed again before the lock is
//! released, so a finished write leaves only the destination behind.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Permissions applied to generated cache files.
pub const FILE_MODE: u32 = 0o644;

/// Atomically replace `path` with `contents`, creating parent directories.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .map_err(|e| Error::io("failed to create directory", parent, e))?;

    let _lock = LockGuard::acquire(&lock_path(path))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .map_err(|e| Error::io("failed to create temp file in", parent, e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| Error::io("failed to write", tmp.path().to_path_buf(), e))?;
    set_mode(tmp.as_file(), FILE_MODE)
        .map_err(|e| Error::io("failed to set permissions on", path, e))?;

    tmp.persist(path).map_err(|e| Error::io("failed to replace", path, e.error))?;
    Ok(())
}

/// Sibling lock file for `path`.
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

/// Remove `path` if it exists; returns whether a file was removed.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io("failed to remove", path, e)),
    }
}

/// Exclusive advisory lock on a lock file, which is deleted on drop.
struct LockGuard {
    file: File,
    path: PathBuf,
}

impl LockGuard {
    fn acquire(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| Error::io("failed to open lock file", path, e))?;
        FileExt::lock_exclusive(&file).map_err(|e| Error::io("failed to lock", path, e))?;
        Ok(Self { file, path: path.to_path_buf() })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // Unlink while still holding the lock
        if let Err(e) = remove_if_exists(&self.path) {
            tracing::debug!("lock file left behind: {}", e);
        }
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(unix)]
fn set_mode(file: &File, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt as _;
    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &File, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "fs_util_tests.rs"]
mod tests;
