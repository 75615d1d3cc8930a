//! Bundle archive creation and extraction, plus filtered tree copies.

use std::fs::{self, File};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::AppError;
use crate::paths::{CONFIG_REL, DATA_REL};

/// Top-level directories never copied into a config snapshot.
const EXCLUDED_DIRS: &[&str] = &[".git", "target"];

/// Copy a directory tree as-is (plugin data, including nested `.git` clones).
pub fn copy_tree(src: &Path, dst: &Path) -> Result<(), AppError> {
    copy_level(src, dst, &[], false, false)
}

/// Copy a configuration tree, dropping build artifacts.
///
/// Skips `.git` and `target/` at the top level plus any directory named in
/// `extra_excludes` (the airgapped build also strips `.github`). Archives
/// (`*.tar.gz`) are skipped at every level so a bundle never nests a
/// previous bundle.
pub fn copy_tree_filtered(
    src: &Path,
    dst: &Path,
    extra_excludes: &[&str],
) -> Result<(), AppError> {
    copy_level(src, dst, extra_excludes, true, true)
}

fn copy_level(
    src: &Path,
    dst: &Path,
    extra_excludes: &[&str],
    skip_archives: bool,
    top: bool,
) -> Result<(), AppError> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let excluded = top
                && (EXCLUDED_DIRS.contains(&name_str.as_ref())
                    || extra_excludes.contains(&name_str.as_ref()));
            if excluded {
                continue;
            }
            copy_level(&entry.path(), &dst.join(&name), extra_excludes, skip_archives, false)?;
        } else if file_type.is_file() {
            if skip_archives && name_str.ends_with(".tar.gz") {
                continue;
            }
            fs::copy(entry.path(), dst.join(&name))?;
        } else if file_type.is_symlink() {
            #[cfg(unix)]
            {
                let target = fs::read_link(entry.path())?;
                std::os::unix::fs::symlink(target, dst.join(&name))?;
            }
        }
    }

    Ok(())
}

/// Create the gzip tar at `out` from home-relative trees under `staging`.
///
/// Entries are rooted at `.config/nvim` and `.local/share/nvim` so that
/// extraction at a home directory reproduces the installed layout.
pub fn create_bundle(staging: &Path, out: &Path) -> Result<(), AppError> {
    let file = File::create(out)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for rel in [CONFIG_REL, DATA_REL] {
        let tree = staging.join(rel);
        if tree.is_dir() {
            builder.append_dir_all(rel, &tree)?;
        }
    }

    builder.into_inner()?.finish()?;
    Ok(())
}

/// Extract a bundle archive into `home`.
///
/// Entries are trusted as-is; no manifest or content validation happens
/// before unpacking (accepted gap).
pub fn extract_bundle(archive: &Path, home: &Path) -> Result<(), AppError> {
    let file = File::open(archive)?;
    let mut reader = tar::Archive::new(GzDecoder::new(file));
    reader.unpack(home)?;
    Ok(())
}
