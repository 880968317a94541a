// barky platform paths
// Resolves the per-user config and data directories on Linux, macOS and Windows.
//
// The OS is picked with `cfg(target_os)`; the path rules themselves are plain
// functions over an environment lookup so every platform's rules can be tested
// on any host.

use std::env;
use std::path::PathBuf;

/// Which per-user directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Config,
    Data,
}

/// Returns the configuration directory for barky.
///
/// - **Linux**: `$XDG_CONFIG_HOME/barky` or `~/.config/barky`
/// - **macOS**: `~/Library/Application Support/Barky`
/// - **Windows**: `%APPDATA%/Barky`
pub fn get_config_dir() -> PathBuf {
    resolve(DirKind::Config, |key| env::var(key).ok())
}

/// Returns the data directory for barky, where the bookmarks database lives.
///
/// - **Linux**: `$XDG_DATA_HOME/barky` or `~/.local/share/barky`
/// - **macOS**: `~/Library/Application Support/Barky`
/// - **Windows**: `%APPDATA%/Barky`
pub fn get_data_dir() -> PathBuf {
    resolve(DirKind::Data, |key| env::var(key).ok())
}

#[cfg(target_os = "macos")]
fn resolve<F: Fn(&str) -> Option<String>>(kind: DirKind, var: F) -> PathBuf {
    macos_dir(kind, var)
}

#[cfg(target_os = "windows")]
fn resolve<F: Fn(&str) -> Option<String>>(kind: DirKind, var: F) -> PathBuf {
    windows_dir(kind, var)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn resolve<F: Fn(&str) -> Option<String>>(kind: DirKind, var: F) -> PathBuf {
    xdg_dir(kind, var)
}

fn home<F: Fn(&str) -> Option<String>>(var: &F) -> PathBuf {
    PathBuf::from(var("HOME").unwrap_or_else(|| String::from("/tmp")))
}

/// XDG base directories, used on Linux and other Unix systems.
pub fn xdg_dir<F: Fn(&str) -> Option<String>>(kind: DirKind, var: F) -> PathBuf {
    let (xdg_var, fallback): (&str, &[&str]) = match kind {
        DirKind::Config => ("XDG_CONFIG_HOME", &[".config"][..]),
        DirKind::Data => ("XDG_DATA_HOME", &[".local", "share"][..]),
    };

    match var(xdg_var).filter(|v| !v.is_empty()) {
        Some(base) => PathBuf::from(base).join("barky"),
        None => fallback
            .iter()
            .fold(home(&var), |path, part| path.join(part))
            .join("barky"),
    }
}

/// macOS keeps config and data together under Application Support.
pub fn macos_dir<F: Fn(&str) -> Option<String>>(_kind: DirKind, var: F) -> PathBuf {
    home(&var)
        .join("Library")
        .join("Application Support")
        .join("Barky")
}

/// Windows keeps config and data together under the roaming AppData folder.
pub fn windows_dir<F: Fn(&str) -> Option<String>>(_kind: DirKind, var: F) -> PathBuf {
    let appdata = var("APPDATA")
        .unwrap_or_else(|| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Barky")
}
