//! Input path resolution

use crate::error::CliError;
use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` and make the path absolute
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    let absolute = std::path::absolute(&expanded)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    log::debug!("Resolved {} to {}", path.display(), absolute.display());
    Ok(absolute)
}

/// Replace a leading `~` component with the user's home directory
fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir()
                .ok_or_else(|| CliError::HomeDirUnavailable(path.display().to_string()))?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_unchanged() {
        let path = Path::new("/data/preds.txt");
        assert_eq!(resolve_path(path).unwrap(), PathBuf::from("/data/preds.txt"));
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let resolved = resolve_path(Path::new("labels.txt")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("labels.txt"));
        assert_eq!(
            resolved,
            std::env::current_dir().unwrap().join("labels.txt")
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let resolved = resolve_path(Path::new("~/scores/preds.txt")).unwrap();
        assert_eq!(resolved, home.join("scores/preds.txt"));

        let resolved = resolve_path(Path::new("~")).unwrap();
        assert_eq!(resolved, home);
    }

    #[test]
    fn test_tilde_inside_path_is_literal() {
        let resolved = resolve_path(Path::new("/data/~/preds.txt")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/~/preds.txt"));
    }
}
