//! Airgapped: self-contained transfer package with editor binaries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::bundle;
use crate::download::{APPIMAGE_ASSET, DownloadConfig, Downloader, STANDARD_ASSET};
use crate::error::AppError;
use crate::paths::InstallPaths;
use crate::templates;

/// Options for the airgapped build.
#[derive(Debug, Clone, Default)]
pub struct AirgappedOptions {
    /// Download endpoint override; defaults to the upstream release host.
    pub download: DownloadConfig,
}

/// One entry of the produced package, for the summary listing.
#[derive(Debug)]
pub struct PackageEntry {
    pub name: String,
    pub bytes: u64,
}

/// Outcome of the airgapped build.
#[derive(Debug)]
pub struct AirgappedReport {
    pub dir: PathBuf,
    pub entries: Vec<PackageEntry>,
    pub total_bytes: u64,
}

/// Execute the airgapped build.
///
/// A superset of `bundle`: downloads both editor distributions, builds the
/// bundle into the output directory (also stripping CI metadata, useless on
/// an offline machine), and emits the secondary installer plus a readme.
pub fn execute(
    paths: &InstallPaths,
    options: &AirgappedOptions,
) -> Result<AirgappedReport, AppError> {
    let plugin_dir = paths.plugin_data_dir();
    if !plugin_dir.is_dir() {
        return Err(AppError::PluginDataMissing(plugin_dir));
    }

    let out_dir = paths.airgapped_dir();
    fs::create_dir_all(&out_dir)?;

    let downloader = Downloader::new(options.download.clone())?;
    for asset in [STANDARD_ASSET, APPIMAGE_ASSET] {
        downloader.fetch_asset(asset, &out_dir.join(asset))?;
    }
    make_executable(&out_dir.join(APPIMAGE_ASSET))?;

    bundle::build_archive(paths, &out_dir, &[".github"])?;

    let script_path = out_dir.join("install.sh");
    fs::write(&script_path, templates::render_install_script()?)?;
    make_executable(&script_path)?;

    fs::write(out_dir.join("README.txt"), templates::render_readme()?)?;

    report(&out_dir)
}

fn make_executable(path: &Path) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o755);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

fn report(dir: &Path) -> Result<AirgappedReport, AppError> {
    let mut entries = Vec::new();
    let mut total_bytes = 0u64;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let bytes = entry.metadata()?.len();
        total_bytes += bytes;
        entries.push(PackageEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            bytes,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(AirgappedReport { dir: dir.to_path_buf(), entries, total_bytes })
}
