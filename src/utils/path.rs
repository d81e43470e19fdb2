//! Path utilities: expand ~ in user-supplied paths, database path resolution.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Database path as given on the command line: `~/` expanded, relative
/// paths taken from the current directory.
pub fn resolve_db_path(path: &str) -> String {
    let p = expand_tilde(path);
    let p = match std::env::current_dir() {
        Ok(cwd) if p.is_relative() => cwd.join(p),
        _ => p,
    };
    p.to_string_lossy().to_string()
}

/// Size of a file in bytes, 0 when it does not exist.
pub fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
