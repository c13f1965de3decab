//! Common file system operations with unified error handling

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result};

/// Mode of written files on unix
#[cfg(unix)]
const SOURCE_FILE_MODE: u32 = 0o644;

/// Create `dir` and any missing ancestors
///
/// Succeeds without touching the file system when the directory is already
/// there.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir)
        .map_err(|e| error::directory_create_failed(dir.display().to_string(), e.to_string()))?;
    tracing::debug!(path = %dir.display(), "created directory");
    Ok(())
}

/// Write `contents` to `path` in one step
///
/// The data goes to a temporary file next to `path` which is then renamed
/// over it, so readers never observe a partially written file. An existing
/// file at `path` is replaced.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    persist_temp(path, contents, true)
}

/// Like [`write_atomic`], but fails with `AlreadyExists` instead of
/// replacing a file that is already at `path`
///
/// The check and the rename are one operation, so a file created by a
/// concurrent writer is not replaced either.
pub fn write_atomic_new(path: &Path, contents: &str) -> Result<()> {
    persist_temp(path, contents, false)
}

fn persist_temp(path: &Path, contents: &str, replace: bool) -> Result<()> {
    let write_failed =
        |reason: String| error::file_write_failed(path.display().to_string(), reason);

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    file.flush().map_err(|e| write_failed(e.to_string()))?;

    // Temp files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(SOURCE_FILE_MODE))
            .map_err(|e| write_failed(e.to_string()))?;
    }

    let persisted = if replace {
        file.persist(path).map(drop)
    } else {
        file.persist_noclobber(path).map(drop)
    };

    persisted.map_err(|e| match e.error.kind() {
        ErrorKind::AlreadyExists => error::already_exists(path.display().to_string()),
        _ => write_failed(e.error.to_string()),
    })
}

/// Write `contents` to `path` unless a file is already there
pub fn write_new(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(error::already_exists(path.display().to_string()));
    }
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    write_atomic(path, contents)
}
