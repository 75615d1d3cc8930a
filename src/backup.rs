//! Backup-by-rename for existing configuration directories.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::AppError;

/// Move `path` aside to `<path>.backup.<YYYYMMDD_HHMMSS>` if it exists.
///
/// Returns the backup location, or `None` when there was nothing to back up.
/// The rename happens before any new content is written to `path`; existing
/// data is never deleted. Two backups within the same second collide, which
/// is an accepted gap.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".backup.{stamp}"));
    let backup = PathBuf::from(name);

    fs::rename(path, &backup)?;
    Ok(Some(backup))
}
