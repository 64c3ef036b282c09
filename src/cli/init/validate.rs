//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

use crate::config::CONFIG_FILE;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `siteconf init` - current directory, must not hold a config yet
    CurrentDir,
    /// `siteconf init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let config = root.join(CONFIG_FILE);
            if config.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Remove it first or use `siteconf init <name>` for a new site.",
                    config.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_without_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_current_dir_with_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
        assert!(validate_target(&temp.path().join("fresh"), InitMode::NewDir).is_ok());
    }
}
