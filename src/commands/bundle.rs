//! Bundle: snapshot configuration plus resolved plugins into one archive.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::archive;
use crate::error::AppError;
use crate::paths::{BUNDLE_NAME, CONFIG_REL, DATA_REL, InstallPaths};

/// Build the bundle archive into `out_dir` and return its location.
///
/// `extra_excludes` names additional top-level config directories to strip
/// (the airgapped build drops `.github`). Staging happens in a temporary
/// directory that is removed when the guard drops, on success or failure.
pub(crate) fn build_archive(
    paths: &InstallPaths,
    out_dir: &Path,
    extra_excludes: &[&str],
) -> Result<PathBuf, AppError> {
    let config_dir = paths.config_dir();
    if !config_dir.is_dir() {
        return Err(AppError::ConfigDirMissing(config_dir));
    }
    let plugin_dir = paths.plugin_data_dir();
    if !plugin_dir.is_dir() {
        return Err(AppError::PluginDataMissing(plugin_dir));
    }

    let staging = TempDir::new()?;
    archive::copy_tree_filtered(&config_dir, &staging.path().join(CONFIG_REL), extra_excludes)?;
    archive::copy_tree(&paths.data_dir(), &staging.path().join(DATA_REL))?;

    fs::create_dir_all(out_dir)?;
    let out = out_dir.join(BUNDLE_NAME);
    archive::create_bundle(staging.path(), &out)?;
    Ok(out)
}

/// Execute the bundle command: the archive lands next to the source tree.
pub fn execute(paths: &InstallPaths) -> Result<PathBuf, AppError> {
    build_archive(paths, paths.source_root(), &[])
}
