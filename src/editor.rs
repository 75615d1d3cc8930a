//! Invocations of the external Neovim executable.

use std::io;
use std::process::Command;

use crate::error::AppError;

/// Default executable name looked up on PATH.
pub const DEFAULT_PROGRAM: &str = "nvim";

/// Headless command that makes lazy.nvim install every declared plugin.
const SYNC_COMMAND: &str = "+Lazy! sync";

/// Handle to the editor binary.
#[derive(Debug, Clone)]
pub struct Editor {
    program: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Editor {
    /// Use a specific executable name or path instead of `nvim`.
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    /// Verify the editor can be invoked at all.
    ///
    /// Probes by running `--version` rather than scanning PATH: an executable
    /// that exists but cannot run is as unusable as a missing one.
    pub fn ensure_available(&self) -> Result<(), AppError> {
        match Command::new(&self.program).arg("--version").output() {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(AppError::CommandFailed {
                command: format!("{} --version", self.program),
                details: stderr_or_status(&output),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::EditorNotFound(self.program.clone()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    /// Run the plugin manager sync in headless batch mode.
    ///
    /// Network access happens here: lazy.nvim downloads every declared plugin
    /// into the data directory before the editor exits. A non-zero exit is
    /// surfaced as a distinct `PluginSync` error with the captured stderr.
    pub fn sync_plugins(&self) -> Result<(), AppError> {
        let output = Command::new(&self.program)
            .args(["--headless", SYNC_COMMAND, "+qa"])
            .output()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => AppError::EditorNotFound(self.program.clone()),
                _ => AppError::Io(err),
            })?;

        if !output.status.success() {
            return Err(AppError::PluginSync(stderr_or_status(&output)));
        }
        Ok(())
    }
}

fn stderr_or_status(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() { format!("exit status {}", output.status) } else { stderr }
}
