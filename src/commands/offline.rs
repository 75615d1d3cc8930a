//! Offline install: extract a previously built bundle archive into home.

use std::path::PathBuf;

use crate::archive;
use crate::backup;
use crate::error::AppError;
use crate::paths::InstallPaths;

/// Outcome of an offline install.
#[derive(Debug)]
pub struct OfflineResult {
    /// Where the previous configuration was moved, if any.
    pub backup: Option<PathBuf>,
}

/// Execute the offline install.
///
/// The bundle must sit next to the source tree; its entries are
/// home-relative and are extracted without inspection.
pub fn execute(paths: &InstallPaths) -> Result<OfflineResult, AppError> {
    let bundle = paths.bundle_path();
    if !bundle.is_file() {
        return Err(AppError::BundleMissing(bundle));
    }

    let backup = backup::backup_existing(&paths.config_dir())?;

    archive::extract_bundle(&bundle, paths.home())?;

    Ok(OfflineResult { backup })
}
