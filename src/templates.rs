//! Rendered artifacts emitted into the airgapped package.

use minijinja::{Environment, context};

use crate::download::{APPIMAGE_ASSET, NVIM_VERSION, STANDARD_ASSET};
use crate::error::AppError;
use crate::paths::BUNDLE_NAME;

/// Secondary installer shipped inside the airgapped package.
///
/// Runs on a machine with no network and no nvbundle binary, so it repeats
/// only the subset of install logic needed there: platform gate, binary
/// probe with AppImage fallback, backup-by-rename, bundle extraction, and
/// marker verification.
const INSTALL_SCRIPT: &str = r#"#!/usr/bin/env bash
# Offline installer for the bundled Neovim {{ version }} configuration.
# Generated by nvbundle. No network access required.
set -euo pipefail

RED='\033[0;31m'
GREEN='\033[0;32m'
YELLOW='\033[1;33m'
NC='\033[0m'

info()  { printf "${GREEN}%s${NC}\n" "$1"; }
warn()  { printf "${YELLOW}%s${NC}\n" "$1"; }
fatal() { printf "${RED}error: %s${NC}\n" "$1" >&2; exit 1; }

[ "$(uname -s)" = "Linux" ] || fatal "this package only supports Linux"
[ "$(uname -m)" = "x86_64" ] || fatal "this package only supports x86_64"

PKG_DIR="$(cd "$(dirname "$0")" && pwd)"
STAMP="$(date +%Y%m%d_%H%M%S)"

[ -f "$PKG_DIR/{{ bundle }}" ] || fatal "{{ bundle }} not found next to this script"
[ -f "$PKG_DIR/{{ standard }}" ] || fatal "{{ standard }} not found next to this script"
[ -f "$PKG_DIR/{{ appimage }}" ] || fatal "{{ appimage }} not found next to this script"

# Prefer the standard build; fall back to the AppImage when it cannot run on
# this system (old glibc, missing shared libraries). The probe is an actual
# invocation: only a binary that runs counts as usable.
install_standard() {
    mkdir -p "$HOME/.local"
    tar -xzf "$PKG_DIR/{{ standard }}" -C "$HOME/.local"
    "$HOME/.local/nvim-linux64/bin/nvim" --version >/dev/null 2>&1
}

if install_standard; then
    NVIM_BIN="$HOME/.local/nvim-linux64/bin"
    info "using standard build at $NVIM_BIN"
else
    warn "standard build failed to run, falling back to AppImage"
    mkdir -p "$HOME/.local/bin"
    cp "$PKG_DIR/{{ appimage }}" "$HOME/.local/bin/nvim"
    chmod +x "$HOME/.local/bin/nvim"
    "$HOME/.local/bin/nvim" --version >/dev/null 2>&1 || fatal "AppImage also failed to run"
    NVIM_BIN="$HOME/.local/bin"
fi

# Never delete an existing configuration; move it aside instead.
if [ -e "$HOME/.config/nvim" ]; then
    mv "$HOME/.config/nvim" "$HOME/.config/nvim.backup.$STAMP"
    info "existing config moved to ~/.config/nvim.backup.$STAMP"
fi

tar -xzf "$PKG_DIR/{{ bundle }}" -C "$HOME"

[ -f "$HOME/.config/nvim/init.lua" ] \
    || fatal "verification failed: ~/.config/nvim/init.lua missing after extraction"
[ -d "$HOME/.local/share/nvim/lazy" ] \
    || fatal "verification failed: ~/.local/share/nvim/lazy missing after extraction"

info "Neovim {{ version }} configuration installed"

PATH_LINE="export PATH=\"$NVIM_BIN:\$PATH\""
if [ -t 0 ]; then
    printf "Append '%s' to ~/.bashrc? [y/N] " "$PATH_LINE"
    read -r answer
    case "$answer" in
        y|Y)
            echo "$PATH_LINE" >> "$HOME/.bashrc"
            info "updated ~/.bashrc"
            ;;
        *)
            warn "add it manually: $PATH_LINE"
            ;;
    esac
else
    warn "add to your shell startup file: $PATH_LINE"
fi
"#;

const README: &str = r#"Neovim {{ version }} offline package
====================================

Contents:
  {{ bundle }}   - configuration and plugin snapshot
  {{ standard }}  - standard Linux x86_64 build
  {{ appimage }}        - portable AppImage fallback
  install.sh           - installer for the target machine

Copy this directory to the offline machine and run ./install.sh.
The installer picks whichever bundled Neovim build actually runs on the
target, backs up any existing configuration with a timestamp suffix, and
extracts the snapshot into your home directory.
"#;

/// Render the secondary install script.
pub fn render_install_script() -> Result<String, AppError> {
    render("install.sh", INSTALL_SCRIPT)
}

/// Render the package readme.
pub fn render_readme() -> Result<String, AppError> {
    render("README.txt", README)
}

fn render(name: &str, source: &str) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)?;
    let template = env.get_template(name)?;
    let rendered = template.render(context! {
        version => NVIM_VERSION,
        bundle => BUNDLE_NAME,
        standard => STANDARD_ASSET,
        appimage => APPIMAGE_ASSET,
    })?;
    Ok(rendered)
}
