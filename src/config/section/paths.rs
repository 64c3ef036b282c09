//! `[paths]` section configuration.
//!
//! Where the generator finds content and how articles map to URLs.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! content = "content"
//! static = ["blog", "downloads"]
//! articles = ["blog"]
//! article_url = "{date:%Y}/{slug}.html"
//! article_save_as = "{date:%Y}/{slug}.html"
//! ```

use crate::config::util::{escapes_root, path_syntax_error};
use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `{name}` or `{name:format}` inside an URL/save-as pattern.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}:]*)(?::[^{}]*)?\}").expect("placeholder regex is valid"));

/// Article attributes the generator substitutes into URL patterns.
pub const ARTICLE_PLACEHOLDERS: &[&str] = &["slug", "date", "lang", "category", "author", "title"];

/// Where the generator finds its sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "paths")]
pub struct PathsConfig {
    /// Root directory scanned for source content (relative to site root).
    pub content: PathBuf,

    /// Directories copied verbatim into output (relative to `content`).
    #[serde(rename = "static")]
    #[config(name = "static")]
    pub static_paths: Vec<PathBuf>,

    /// Directories scanned for blog posts (relative to `content`).
    /// Empty means the whole content root.
    pub articles: Vec<PathBuf>,

    /// URL pattern of a single article (e.g., "{date:%Y}/{slug}.html").
    pub article_url: Option<String>,

    /// Output file pattern of a single article.
    pub article_save_as: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            static_paths: vec!["images".into()],
            articles: Vec::new(),
            article_url: None,
            article_save_as: None,
        }
    }
}

impl PathsConfig {
    /// Validate raw path values, before they are joined to the site root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(problem) = path_syntax_error(&self.content) {
            diag.error(Self::FIELDS.content, problem);
        }

        Self::validate_content_relative(&self.static_paths, Self::FIELDS.static_paths, diag);
        Self::validate_content_relative(&self.articles, Self::FIELDS.articles, diag);

        for (pattern, field) in [
            (&self.article_url, Self::FIELDS.article_url),
            (&self.article_save_as, Self::FIELDS.article_save_as),
        ] {
            if let Some(pattern) = pattern
                && let Err(problem) = check_pattern(pattern, ARTICLE_PLACEHOLDERS)
            {
                diag.error_with_hint(
                    field,
                    problem,
                    format!("known placeholders: {}", ARTICLE_PLACEHOLDERS.join(", ")),
                );
            }
        }

        match (&self.article_url, &self.article_save_as) {
            (Some(_), None) => diag.warn(
                Self::FIELDS.article_save_as,
                format!("{} is set without a matching save_as pattern", Self::FIELDS.article_url),
            ),
            (None, Some(_)) => diag.warn(
                Self::FIELDS.article_url,
                format!("{} is set without a matching url pattern", Self::FIELDS.article_save_as),
            ),
            _ => {}
        }
    }

    /// Static and article directories live inside the content root.
    fn validate_content_relative(
        paths: &[PathBuf],
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        for path in paths {
            if let Some(problem) = path_syntax_error(path) {
                diag.error(field, problem);
            } else if path.is_absolute() || escapes_root(path) {
                diag.error_with_hint(
                    field,
                    format!("'{}' must stay inside the content directory", path.display()),
                    "use a path relative to `paths.content`",
                );
            }
        }
    }

    /// Check that static directories exist under the resolved content root.
    pub fn validate_static_dirs(&self, content_dir: &Path, diag: &mut ConfigDiagnostics) {
        for path in &self.static_paths {
            if !content_dir.join(path).exists() {
                diag.warn(
                    Self::FIELDS.static_paths,
                    format!("'{}' does not exist, nothing will be copied", path.display()),
                );
            }
        }
    }
}

/// Validate placeholders of a generator pattern such as `{date:%Y}/{slug}.html`.
///
/// Every `{...}` must name an entry of `known`, and no stray brace may remain.
pub fn check_pattern(pattern: &str, known: &[&str]) -> Result<(), String> {
    for caps in PLACEHOLDER.captures_iter(pattern) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        if !known.contains(&name) {
            return Err(format!("unknown placeholder '{{{name}}}' in '{pattern}'"));
        }
    }
    let rest = PLACEHOLDER.replace_all(pattern, "");
    if rest.contains(['{', '}']) {
        return Err(format!("unbalanced braces in '{pattern}'"));
    }
    Ok(())
}

/// Whether `pattern` contains the `{name}` placeholder (with or without format).
pub fn has_placeholder(pattern: &str, name: &str) -> bool {
    PLACEHOLDER
        .captures_iter(pattern)
        .any(|caps| caps.get(1).is_some_and(|m| m.as_str() == name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn diagnose(paths: &PathsConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        paths.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.paths.content, PathBuf::from("content"));
        assert_eq!(config.paths.static_paths, vec![PathBuf::from("images")]);
        assert!(config.paths.articles.is_empty());
        assert!(diagnose(&config.paths).is_empty());
    }

    #[test]
    fn test_custom_paths() {
        let config = test_parse_config(
            "[paths]\ncontent = \"content\"\nstatic = [\"blog\", \"downloads\"]\narticles = [\"blog\"]",
        );
        assert_eq!(
            config.paths.static_paths,
            vec![PathBuf::from("blog"), PathBuf::from("downloads")]
        );
        assert_eq!(config.paths.articles, vec![PathBuf::from("blog")]);
    }

    #[test]
    fn test_escaping_paths_rejected() {
        let paths = PathsConfig {
            static_paths: vec!["../secrets".into(), "/etc".into()],
            articles: vec!["".into()],
            ..PathsConfig::default()
        };
        let diag = diagnose(&paths);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_empty_content_rejected() {
        let paths = PathsConfig {
            content: PathBuf::new(),
            ..PathsConfig::default()
        };
        assert!(diagnose(&paths).has_errors());
    }

    #[test]
    fn test_article_patterns() {
        let paths = PathsConfig {
            article_url: Some("{date:%Y}/{slug}.html".into()),
            article_save_as: Some("{date:%Y}/{slug}.html".into()),
            ..PathsConfig::default()
        };
        let diag = diagnose(&paths);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());

        let paths = PathsConfig {
            article_url: Some("{year}/{slug}.html".into()),
            ..PathsConfig::default()
        };
        let diag = diagnose(&paths);
        assert!(diag.has_errors());
        assert!(
            diag.warnings()
                .iter()
                .any(|(f, _)| *f == PathsConfig::FIELDS.article_save_as)
        );
    }

    #[test]
    fn test_check_pattern() {
        assert!(check_pattern("{slug}.html", ARTICLE_PLACEHOLDERS).is_ok());
        assert!(check_pattern("posts/{date:%Y/%m}/{slug}/", ARTICLE_PLACEHOLDERS).is_ok());
        assert!(check_pattern("plain.html", ARTICLE_PLACEHOLDERS).is_ok());
        assert!(check_pattern("{slug.html", ARTICLE_PLACEHOLDERS).is_err());
        assert!(check_pattern("{nope}.html", ARTICLE_PLACEHOLDERS).is_err());
    }

    #[test]
    fn test_has_placeholder() {
        assert!(has_placeholder("feeds/{slug}.atom.xml", "slug"));
        assert!(has_placeholder("{date:%Y}/x", "date"));
        assert!(!has_placeholder("feeds/all.atom.xml", "slug"));
    }

    #[test]
    fn test_missing_static_dirs_warn() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("blog")).unwrap();
        let paths = PathsConfig {
            static_paths: vec!["blog".into(), "downloads".into()],
            ..PathsConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        paths.validate_static_dirs(temp.path(), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].1.contains("downloads"));
    }
}
