//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! path = "./current-theme/elegant"
//! ```

use crate::config::util::path_syntax_error;
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Themes shipped inside the generator itself, referenced by bare name.
pub const BUILTIN_THEMES: &[&str] = &["simple", "notmyidea"];

/// Presentation templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Theme directory (relative to site root, `~` allowed), or a built-in theme name.
    pub path: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: "simple".into(),
        }
    }
}

impl ThemeConfig {
    /// Bare built-in theme names are resolved by the generator, not the filesystem.
    pub fn is_builtin(&self) -> bool {
        self.path
            .to_str()
            .is_some_and(|name| BUILTIN_THEMES.contains(&name))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(problem) = path_syntax_error(&self.path) {
            diag.error(Self::FIELDS.path, problem);
        }
    }

    /// Check that a non built-in theme resolves to an existing directory.
    pub fn validate_dir(&self, theme_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.is_builtin() {
            return;
        }
        if !theme_dir.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.path,
                format!("theme directory '{}' does not exist", theme_dir.display()),
                format!("install a theme there or use one of: {}", BUILTIN_THEMES.join(", ")),
            );
        } else if !theme_dir.join("templates").is_dir() {
            diag.warn(
                Self::FIELDS.path,
                format!("'{}' has no templates/ directory", theme_dir.display()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.path, PathBuf::from("simple"));
        assert!(config.theme.is_builtin());
    }

    #[test]
    fn test_custom_path() {
        let config = test_parse_config("[theme]\npath = \"./current-theme/elegant\"");
        assert_eq!(config.theme.path, PathBuf::from("./current-theme/elegant"));
        assert!(!config.theme.is_builtin());
    }

    #[test]
    fn test_empty_path_rejected() {
        let theme = ThemeConfig {
            path: PathBuf::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_dir() {
        let temp = TempDir::new().unwrap();
        let theme = ThemeConfig {
            path: "themes/elegant".into(),
        };
        let dir = temp.path().join("themes/elegant");

        let mut diag = ConfigDiagnostics::new();
        theme.validate_dir(&dir, &mut diag);
        assert!(diag.has_errors());

        std::fs::create_dir_all(&dir).unwrap();
        let mut diag = ConfigDiagnostics::new();
        theme.validate_dir(&dir, &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);

        std::fs::create_dir(dir.join("templates")).unwrap();
        let mut diag = ConfigDiagnostics::new();
        theme.validate_dir(&dir, &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_builtin_skips_filesystem() {
        let theme = ThemeConfig::default();
        let mut diag = ConfigDiagnostics::new();
        theme.validate_dir(Path::new("/definitely/not/here"), &mut diag);
        assert!(diag.is_empty());
    }
}
