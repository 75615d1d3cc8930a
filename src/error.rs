use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for nvbundle operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Home directory could not be determined.
    #[error("Could not determine home directory (is $HOME set?)")]
    HomeNotFound,

    /// The editor executable is not on PATH.
    #[error("'{0}' not found on PATH. Install Neovim first.")]
    EditorNotFound(String),

    /// No bundle archive next to the tool.
    #[error(
        "Bundle archive not found at {0}. Run 'nvbundle bundle' on a machine with network access first."
    )]
    BundleMissing(PathBuf),

    /// Configuration directory is missing.
    #[error("Configuration directory not found at {0}. Run 'nvbundle online' first.")]
    ConfigDirMissing(PathBuf),

    /// Plugin data has never been populated by the plugin manager.
    #[error("Plugin data not found at {0}. Run 'nvbundle online' so plugins get installed first.")]
    PluginDataMissing(PathBuf),

    /// An external command could be spawned but exited non-zero.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// The headless plugin sync exited non-zero.
    #[error("Plugin sync failed: {0}")]
    PluginSync(String),

    /// An HTTP download failed.
    #[error("Download of {url} failed: {details}")]
    Download { url: String, details: String },

    /// A downloaded file is missing or empty.
    #[error("Downloaded file {0} is missing or empty")]
    EmptyDownload(PathBuf),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for AppError {
    fn from(value: minijinja::Error) -> Self {
        AppError::Template(value.to_string())
    }
}
