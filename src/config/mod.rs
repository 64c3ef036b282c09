//! Site settings management for `siteconf.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── feed       # [feed]
//! │   ├── links      # [links]
//! │   ├── paths      # [paths]
//! │   ├── site       # [site]
//! │   └── theme      # [theme]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # File discovery and path checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The record is built once by [`SiteConfig::load`] and only read afterwards.

pub mod section;
pub mod types;
pub mod util;

use util::{expand_tilde, extract_url_path, find_config_file};

pub use section::{
    BuildConfig, FeedConfig, FeedKind, FeedToggle, Link, LinksConfig, Pagination, PathsConfig,
    SiteInfoConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "siteconf.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `siteconf.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Identity and locale
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Content, static and article paths
    #[serde(default)]
    pub paths: PathsConfig,

    /// Pagination and URL style
    #[serde(default)]
    pub build: BuildConfig,

    /// Feed toggles
    #[serde(default)]
    pub feed: FeedConfig,

    /// Blogroll and social links
    #[serde(default)]
    pub links: LinksConfig,

    /// Theme selection
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Load, finalize and validate configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file unless an absolute
    /// path is given. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = Self::resolve_config_path(&cli.config)?;
        debug!("load"; "using {}", config_path.display());

        let (mut config, ignored) = Self::from_path(&config_path)?;

        let mut diag = ConfigDiagnostics::new();
        Self::report_unknown_fields(&ignored, cli.deny_unknown(), &mut diag);

        config.config_path = config_path;
        config.finalize(cli);
        diag.merge(config.collect_diagnostics());

        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
            .map(|()| config)
    }

    /// Locate the config file, failing with a clear error when it is missing.
    fn resolve_config_path(name: &Path) -> Result<PathBuf> {
        match find_config_file(name) {
            Some(path) => Ok(util::normalize_path(&path)),
            None => bail!(ConfigError::NotFound(name.to_path_buf())),
        }
    }

    /// Finalize configuration after loading: root, CLI overrides, `~` expansion.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::update_option(&mut self.site.url, cli.site_url.clone().map(Some).as_ref());
        Self::update_option(&mut self.paths.content, cli.content.as_ref());
        Self::update_option(&mut self.theme.path, cli.theme.as_ref());

        self.theme.path = expand_tilde(&self.theme.path);
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path, returning unknown field paths alongside.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>)> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Report unknown fields: warnings by default, errors when `deny` is set.
    fn report_unknown_fields(fields: &[String], deny: bool, diag: &mut ConfigDiagnostics) {
        const UNKNOWN: FieldPath = FieldPath::new("<unknown>");

        for field in fields {
            if deny {
                diag.error_with_hint(
                    UNKNOWN,
                    format!("unknown field `{field}`"),
                    "remove it or fix the typo",
                );
            } else {
                diag.warn(UNKNOWN, format!("unknown field `{field}`, ignoring"));
            }
        }
    }

    // ========================================================================
    // paths
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root_join(&self.paths.content)
    }

    /// Absolute theme directory (meaningless for built-in themes).
    pub fn theme_dir(&self) -> PathBuf {
        self.root_join(&self.theme.path)
    }

    /// URL path the site is served under, e.g. `blog` for `https://host/blog`.
    pub fn path_prefix(&self) -> Option<String> {
        self.site
            .url
            .as_deref()
            .and_then(extract_url_path)
            .filter(|p| !p.is_empty())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration values without touching the filesystem.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_values(&mut diag);
        diag.into_result()
    }

    /// Run every check, including existence of the referenced directories.
    fn collect_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.validate_values(&mut diag);
        self.validate_filesystem(&mut diag);
        diag
    }

    fn validate_values(&self, diag: &mut ConfigDiagnostics) {
        let feeds_enabled = self.feed.any_enabled();
        self.site.validate(feeds_enabled, diag);
        self.paths.validate(diag);
        self.build.validate(feeds_enabled, diag);
        self.feed.validate(diag);
        self.links.validate(diag);
        self.theme.validate(diag);

        self.site.validate_field_status(diag);
        self.paths.validate_field_status(diag);
        self.build.validate_field_status(diag);
        self.feed.validate_field_status(diag);
        self.links.validate_field_status(diag);
        self.theme.validate_field_status(diag);
    }

    /// Content and theme must exist; missing static directories only warn.
    fn validate_filesystem(&self, diag: &mut ConfigDiagnostics) {
        let content_dir = self.content_dir();
        if !content_dir.is_dir() {
            diag.error_with_hint(
                PathsConfig::FIELDS.content,
                format!("content directory '{}' does not exist", content_dir.display()),
                "create it or point `paths.content` at your sources",
            );
        } else {
            self.paths.validate_static_dirs(&content_dir, diag);
        }

        self.theme.validate_dir(&self.theme_dir(), diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nname = \"Test\"\nauthor = \"Tester\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The blog settings this tool was first written for.
#[cfg(test)]
pub const SAMPLE_CONFIG: &str = r##"
[site]
author = "Eric Hardy"
name = "Done Is Better Than Perfect"
url = "http://erichardy.pythonanywhere.com/blog"
timezone = "America/New_York"
language = "en"

[paths]
content = "content"
static = ["blog", "downloads"]
articles = ["blog"]

[build]
pagination = false

[feed]
all_atom = false
category_atom = false
translation_atom = false
author_atom = false
author_rss = false

[links]
blogroll = [
    ["Pelican", "http://getpelican.com/"],
    ["Python.org", "http://python.org/"],
    ["Jinja2", "http://jinja.pocoo.org/"],
    ["You can modify those links in your config file", "#"],
]
social = [
    ["You can add links in your config file", "#"],
    ["Another social link", "#"],
]

[theme]
path = "./current-theme/elegant"
"##;

// ============================================================================
// tests
// ============================================================================
