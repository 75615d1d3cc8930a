//! Shared testing utilities for nvbundle CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises:
/// a fake `$HOME`, a source tree to install from, and a fake `nvim` on `PATH`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    source_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a working fake editor.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let source_dir = root.path().join("source");
        fs::create_dir_all(&source_dir).expect("Failed to create source directory");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");

        let ctx = Self { root, source_dir, bin_dir };
        ctx.install_fake_editor("exit 0");
        ctx
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory the CLI is invoked from, standing in for the config repo.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Path to `~/.config/nvim` inside the emulated home.
    pub fn config_dir(&self) -> PathBuf {
        self.home().join(".config/nvim")
    }

    /// Path to `~/.local/share/nvim/lazy` inside the emulated home.
    pub fn plugin_dir(&self) -> PathBuf {
        self.home().join(".local/share/nvim/lazy")
    }

    /// Path to the bundle archive next to the source tree.
    pub fn bundle_path(&self) -> PathBuf {
        self.source_dir.join("nvim-bundle.tar.gz")
    }

    /// Overwrite the fake `nvim` script with the given shell body.
    pub fn install_fake_editor(&self, body: &str) {
        let path = self.bin_dir.join("nvim");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake nvim");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).expect("stat fake nvim").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("chmod fake nvim");
        }
    }

    /// Remove the fake editor so PATH lookups fail.
    pub fn remove_fake_editor(&self) {
        fs::remove_file(self.bin_dir.join("nvim")).expect("Failed to remove fake nvim");
    }

    /// Populate the source tree with a minimal config plus build artifacts
    /// that must never reach the installed config.
    pub fn seed_source_tree(&self) {
        fs::create_dir_all(self.source_dir.join("lua/plugins")).expect("mkdir lua");
        fs::create_dir_all(self.source_dir.join(".git")).expect("mkdir .git");
        fs::write(self.source_dir.join("init.lua"), "require('plugins')").expect("write init.lua");
        fs::write(self.source_dir.join("lua/plugins/spec.lua"), "return {}")
            .expect("write spec.lua");
        fs::write(self.source_dir.join(".git/HEAD"), "ref: refs/heads/main").expect("write HEAD");
    }

    /// Populate `~/.config/nvim` directly, as a prior install would have.
    pub fn seed_installed_config(&self, init_content: &str) {
        let config = self.config_dir();
        fs::create_dir_all(&config).expect("mkdir config");
        fs::write(config.join("init.lua"), init_content).expect("write init.lua");
    }

    /// Populate the plugin data directory, as a prior plugin sync would have.
    pub fn seed_plugins(&self) {
        let plugin = self.plugin_dir().join("plenary.nvim");
        fs::create_dir_all(&plugin).expect("mkdir plugin");
        fs::write(plugin.join("README.md"), "plenary").expect("write plugin file");
    }

    /// Directories under `~/.config` whose names mark them as backups.
    pub fn config_backups(&self) -> Vec<PathBuf> {
        let parent = self.home().join(".config");
        let mut backups = Vec::new();
        if let Ok(entries) = fs::read_dir(parent) {
            for entry in entries.flatten() {
                if entry.file_name().to_string_lossy().starts_with("nvim.backup.") {
                    backups.push(entry.path());
                }
            }
        }
        backups
    }

    /// Build a command invoking the compiled `nvbundle` binary in the source
    /// tree, with the emulated home and the fake editor on PATH.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nvbundle").expect("Failed to locate nvbundle binary");
        cmd.current_dir(&self.source_dir)
            .env("HOME", self.home())
            .env("PATH", &self.bin_dir);
        cmd
    }
}
