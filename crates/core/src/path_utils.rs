//! Path utilities for Note Palette
//!
//! Resolves the app root that holds the optional config file and the log file.

use std::path::PathBuf;

const ROOT_ENV: &str = "NOTEPALETTE_ROOT";
const DEFAULT_ROOT: &str = ".notepalette";

fn home_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| ".".to_string())
}

/// Expands a leading tilde (~) to the user's home directory.
/// "~/.notepalette" -> "/home/me/.notepalette"
/// "/tmp/foo" -> "/tmp/foo" (no change)
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => format!("{}/{}", home_dir(), rest),
        None => path.to_string(),
    }
}

/// Resolves a root name the way `NOTEPALETTE_ROOT` is interpreted:
/// absolute paths as-is, tilde paths expanded, bare names under $HOME.
pub fn resolve_root(root_name: &str) -> PathBuf {
    if root_name.starts_with('/') {
        PathBuf::from(root_name)
    } else if root_name.starts_with('~') {
        PathBuf::from(expand_tilde(root_name))
    } else {
        PathBuf::from(home_dir()).join(root_name)
    }
}

pub fn get_app_root() -> PathBuf {
    let root_name = std::env::var(ROOT_ENV).unwrap_or_else(|_| DEFAULT_ROOT.to_string());
    resolve_root(&root_name)
}

/// Like [`get_app_root`], but creates the directory if it is missing.
pub fn ensure_app_root() -> crate::Result<PathBuf> {
    let root = get_app_root();
    if !root.exists() {
        std::fs::create_dir_all(&root)?;
    }
    Ok(root)
}
