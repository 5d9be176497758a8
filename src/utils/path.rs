//! Path utilities: expand ~ and resolve output paths for exports.

use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and anchor relative paths to the current directory.
pub fn resolve_output_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        return expanded;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(expanded),
        Err(_) => expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_kept() {
        let p = env::temp_dir().join("crew.csv");
        let raw = p.to_string_lossy().to_string();
        assert_eq!(resolve_output_path(&raw), p);
    }

    #[test]
    fn relative_paths_become_absolute() {
        assert!(resolve_output_path("out/crew.json").is_absolute());
    }
}
