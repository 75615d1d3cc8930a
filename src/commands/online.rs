//! Online install: copy the configuration source and let lazy.nvim fetch plugins.

use std::path::PathBuf;

use crate::archive;
use crate::backup;
use crate::editor::Editor;
use crate::error::AppError;
use crate::paths::InstallPaths;

/// Outcome of an online install.
#[derive(Debug)]
pub struct OnlineResult {
    /// Where the previous configuration was moved, if any.
    pub backup: Option<PathBuf>,
}

/// Execute the online install.
///
/// Steps in strict order: back up any existing config, copy the source tree
/// into place without build artifacts, then run the headless plugin sync
/// (the one step that touches the network).
pub fn execute(paths: &InstallPaths, editor: &Editor) -> Result<OnlineResult, AppError> {
    let config_dir = paths.config_dir();
    let backup = backup::backup_existing(&config_dir)?;

    archive::copy_tree_filtered(paths.source_root(), &config_dir, &[])?;

    editor.sync_plugins()?;

    Ok(OnlineResult { backup })
}
