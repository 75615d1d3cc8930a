//! Filesystem layout for the Neovim installation.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Name of the bundle archive produced by `bundle` and consumed by `offline`.
pub const BUNDLE_NAME: &str = "nvim-bundle.tar.gz";

/// Output directory for the airgapped package, relative to home.
pub const AIRGAPPED_DIR: &str = "nvim-airgapped";

/// Configuration directory, relative to home. Archive entries use this root.
pub const CONFIG_REL: &str = ".config/nvim";

/// Plugin data directory, relative to home. Archive entries use this root.
pub const DATA_REL: &str = ".local/share/nvim";

/// Subdirectory of the data dir owned by the lazy.nvim plugin manager.
pub const PLUGIN_MANAGER_DIR: &str = "lazy";

/// Resolved filesystem locations every operation works against.
///
/// All paths derive from two roots: the user's home directory and the
/// directory holding this tool's own configuration source tree.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    home: PathBuf,
    source_root: PathBuf,
}

impl InstallPaths {
    /// Create a path context from explicit roots.
    pub fn new(home: PathBuf, source_root: PathBuf) -> Self {
        Self { home, source_root }
    }

    /// Resolve from `$HOME` and the current directory.
    pub fn discover() -> Result<Self, AppError> {
        let home = env::var_os("HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or(AppError::HomeNotFound)?;
        let source_root = env::current_dir()?;
        Ok(Self::new(home, source_root))
    }

    /// The user's home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory containing the configuration source tree.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// `~/.config/nvim`
    pub fn config_dir(&self) -> PathBuf {
        self.home.join(CONFIG_REL)
    }

    /// `~/.local/share/nvim`, owned by the editor and its plugin manager.
    pub fn data_dir(&self) -> PathBuf {
        self.home.join(DATA_REL)
    }

    /// `~/.local/share/nvim/lazy`, populated by a prior plugin sync.
    pub fn plugin_data_dir(&self) -> PathBuf {
        self.data_dir().join(PLUGIN_MANAGER_DIR)
    }

    /// Bundle archive co-located with the configuration source tree.
    pub fn bundle_path(&self) -> PathBuf {
        self.source_root.join(BUNDLE_NAME)
    }

    /// Output directory for the airgapped package.
    pub fn airgapped_dir(&self) -> PathBuf {
        self.home.join(AIRGAPPED_DIR)
    }
}
