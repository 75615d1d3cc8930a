//! nvbundle: install and bundle a personal Neovim configuration for online,
//! offline, and airgapped machines.

pub mod archive;
pub mod backup;
pub mod commands;
pub mod download;
pub mod editor;
pub mod error;
pub mod paths;
pub mod templates;

use std::path::PathBuf;

use commands::{
    airgapped as airgapped_cmd, bundle as bundle_cmd, offline as offline_cmd,
    online as online_cmd,
};
use editor::Editor;
use paths::InstallPaths;

pub use commands::airgapped::{AirgappedOptions, AirgappedReport, PackageEntry};
pub use commands::offline::OfflineResult;
pub use commands::online::OnlineResult;
pub use download::DownloadConfig;
pub use error::AppError;

/// Install the configuration and sync plugins over the network.
pub fn online() -> Result<(), AppError> {
    let paths = InstallPaths::discover()?;
    let editor = Editor::default();
    editor.ensure_available()?;

    let result = online_cmd::execute(&paths, &editor)?;
    report_backup(result.backup.as_deref());
    println!("✅ Installed config to {} and synced plugins", paths.config_dir().display());
    Ok(())
}

/// Install from a local bundle archive, no network required.
pub fn offline() -> Result<(), AppError> {
    let paths = InstallPaths::discover()?;
    let editor = Editor::default();
    editor.ensure_available()?;

    let result = offline_cmd::execute(&paths)?;
    report_backup(result.backup.as_deref());
    println!("✅ Installed config from {}", paths::BUNDLE_NAME);
    Ok(())
}

/// Produce a bundle archive from the installed configuration.
pub fn bundle() -> Result<PathBuf, AppError> {
    let paths = InstallPaths::discover()?;
    let editor = Editor::default();
    editor.ensure_available()?;

    let out = bundle_cmd::execute(&paths)?;
    println!("✅ Bundle written to {}", out.display());
    Ok(out)
}

/// Produce a self-contained transfer package for airgapped machines.
pub fn airgapped() -> Result<AirgappedReport, AppError> {
    let paths = InstallPaths::discover()?;
    let editor = Editor::default();
    editor.ensure_available()?;

    let report = airgapped_cmd::execute(&paths, &AirgappedOptions::default())?;
    println!("✅ Airgapped package at {}", report.dir.display());
    for entry in &report.entries {
        println!("   {:>10}  {}", format_size(entry.bytes), entry.name);
    }
    println!("   {:>10}  total", format_size(report.total_bytes));
    Ok(report)
}

fn report_backup(backup: Option<&std::path::Path>) {
    if let Some(path) = backup {
        println!("📦 Previous config moved to {}", path.display());
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 { format!("{bytes} B") } else { format!("{value:.1} {}", UNITS[unit]) }
}
