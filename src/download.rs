//! HTTP acquisition of the editor's binary distributions.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::AppError;

/// Upstream Neovim release pinned into airgapped packages.
pub const NVIM_VERSION: &str = "v0.10.2";

/// Standard Linux x86_64 release asset.
pub const STANDARD_ASSET: &str = "nvim-linux64.tar.gz";

/// Portable self-contained release asset, the compatibility fallback.
pub const APPIMAGE_ASSET: &str = "nvim.appimage";

const DEFAULT_BASE_URL: &str = "https://github.com/neovim/neovim/releases/download";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Where release assets are fetched from and how long to wait for them.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DownloadConfig {
    /// URL of one release asset for the pinned version.
    pub fn asset_url(&self, asset: &str) -> Result<Url, AppError> {
        let raw =
            format!("{}/{}/{}", self.base_url.as_str().trim_end_matches('/'), NVIM_VERSION, asset);
        Url::parse(&raw).map_err(|err| AppError::Download { url: raw, details: err.to_string() })
    }
}

/// Blocking downloader for release assets.
pub struct Downloader {
    client: Client,
    config: DownloadConfig,
}

impl Downloader {
    pub fn new(config: DownloadConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| AppError::Download {
                url: config.base_url.to_string(),
                details: format!("failed to create HTTP client: {err}"),
            })?;

        Ok(Self { client, config })
    }

    /// Fetch one release asset to `dest` and verify it is non-empty.
    ///
    /// Presence and size are the only integrity checks performed; there is no
    /// checksum or signature validation (accepted gap).
    pub fn fetch_asset(&self, asset: &str, dest: &Path) -> Result<(), AppError> {
        let url = self.config.asset_url(asset)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| AppError::Download {
                url: url.to_string(),
                details: err.to_string(),
            })?;

        let bytes = response.bytes().map_err(|err| AppError::Download {
            url: url.to_string(),
            details: err.to_string(),
        })?;
        fs::write(dest, &bytes)?;

        if fs::metadata(dest)?.len() == 0 {
            return Err(AppError::EmptyDownload(dest.to_path_buf()));
        }
        Ok(())
    }
}
