//! `[feed]` section configuration.
//!
//! Each feed kind is either disabled or names its output file pattern.
//! `true` picks the generator's usual pattern for that kind.
//!
//! # Example
//!
//! ```toml
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! category_atom = true            # feeds/{slug}.atom.xml
//! translation_atom = false
//! ```

use super::paths::has_placeholder;
use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

// ============================================================================
// FeedToggle
// ============================================================================

/// A single feed switch: disabled, or enabled with an output pattern.
///
/// Only built through [`FeedConfig`], which knows the feed kind and so
/// the pattern a bare `true` stands for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedToggle {
    #[default]
    Disabled,
    Pattern(String),
}

impl FeedToggle {
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Pattern(p) => Some(p),
        }
    }
}

/// Raw TOML forms accepted for a feed toggle.
#[derive(Deserialize)]
#[serde(untagged)]
enum ToggleValue {
    Switch(bool),
    Pattern(String),
}

impl ToggleValue {
    fn resolve(self, kind: FeedKind) -> Result<FeedToggle, String> {
        match self {
            Self::Switch(false) => Ok(FeedToggle::Disabled),
            Self::Switch(true) => Ok(FeedToggle::Pattern(kind.default_pattern().to_string())),
            Self::Pattern(p) if p.trim().is_empty() => {
                Err("feed pattern must not be empty, use `false` to disable the feed".into())
            }
            Self::Pattern(p) => Ok(FeedToggle::Pattern(p)),
        }
    }
}

impl Serialize for FeedToggle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Pattern(p) => serializer.serialize_str(p),
        }
    }
}

// ============================================================================
// FeedKind
// ============================================================================

/// The feed kinds the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    AllAtom,
    CategoryAtom,
    TranslationAtom,
    AuthorAtom,
    AuthorRss,
}

impl FeedKind {
    pub const ALL: [Self; 5] = [
        Self::AllAtom,
        Self::CategoryAtom,
        Self::TranslationAtom,
        Self::AuthorAtom,
        Self::AuthorRss,
    ];

    /// Pattern used when the toggle is just `true`.
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::AllAtom => "feeds/all.atom.xml",
            Self::CategoryAtom | Self::AuthorAtom => "feeds/{slug}.atom.xml",
            Self::TranslationAtom => "feeds/all-{lang}.atom.xml",
            Self::AuthorRss => "feeds/{slug}.rss.xml",
        }
    }

    /// Placeholder a per-item feed must contain so items don't share one file.
    pub const fn required_placeholder(self) -> Option<&'static str> {
        match self {
            Self::AllAtom => None,
            Self::CategoryAtom | Self::AuthorAtom | Self::AuthorRss => Some("slug"),
            Self::TranslationAtom => Some("lang"),
        }
    }

    /// Setting name in the exported record.
    pub const fn setting_key(self) -> &'static str {
        match self {
            Self::AllAtom => "FEED_ALL_ATOM",
            Self::CategoryAtom => "CATEGORY_FEED_ATOM",
            Self::TranslationAtom => "TRANSLATION_FEED_ATOM",
            Self::AuthorAtom => "AUTHOR_FEED_ATOM",
            Self::AuthorRss => "AUTHOR_FEED_RSS",
        }
    }
}

// ============================================================================
// FeedConfig
// ============================================================================

/// Feed generation is usually not wanted while developing.
/// false disables a feed, true uses its default pattern, a string sets the pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    /// Every article, e.g. "feeds/all.atom.xml".
    #[serde(deserialize_with = "all_atom")]
    pub all_atom: FeedToggle,
    /// One feed per category, needs {slug}.
    #[serde(deserialize_with = "category_atom")]
    pub category_atom: FeedToggle,
    /// One feed per language, needs {lang}.
    #[serde(deserialize_with = "translation_atom")]
    pub translation_atom: FeedToggle,
    /// One Atom feed per author, needs {slug}.
    #[serde(deserialize_with = "author_atom")]
    pub author_atom: FeedToggle,
    /// One RSS feed per author, needs {slug}.
    #[serde(deserialize_with = "author_rss")]
    pub author_rss: FeedToggle,
}

/// Generates a field deserializer that resolves the raw toggle for its feed kind.
macro_rules! toggle_for_kind {
    ($($name:ident => $kind:expr),* $(,)?) => {$(
        fn $name<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<FeedToggle, D::Error> {
            ToggleValue::deserialize(deserializer)?
                .resolve($kind)
                .map_err(serde::de::Error::custom)
        }
    )*};
}

toggle_for_kind! {
    all_atom => FeedKind::AllAtom,
    category_atom => FeedKind::CategoryAtom,
    translation_atom => FeedKind::TranslationAtom,
    author_atom => FeedKind::AuthorAtom,
    author_rss => FeedKind::AuthorRss,
}

impl FeedConfig {
    /// Toggle of one feed kind.
    pub const fn get(&self, kind: FeedKind) -> &FeedToggle {
        match kind {
            FeedKind::AllAtom => &self.all_atom,
            FeedKind::CategoryAtom => &self.category_atom,
            FeedKind::TranslationAtom => &self.translation_atom,
            FeedKind::AuthorAtom => &self.author_atom,
            FeedKind::AuthorRss => &self.author_rss,
        }
    }

    const fn field(kind: FeedKind) -> FieldPath {
        match kind {
            FeedKind::AllAtom => Self::FIELDS.all_atom,
            FeedKind::CategoryAtom => Self::FIELDS.category_atom,
            FeedKind::TranslationAtom => Self::FIELDS.translation_atom,
            FeedKind::AuthorAtom => Self::FIELDS.author_atom,
            FeedKind::AuthorRss => Self::FIELDS.author_rss,
        }
    }

    /// Whether any feed will be generated.
    pub fn any_enabled(&self) -> bool {
        FeedKind::ALL.iter().any(|&kind| self.get(kind).is_enabled())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for kind in FeedKind::ALL {
            let Some(pattern) = self.get(kind).pattern() else {
                continue;
            };
            if let Some(required) = kind.required_placeholder()
                && !has_placeholder(pattern, required)
            {
                diag.error_with_hint(
                    Self::field(kind),
                    format!("pattern '{pattern}' has no {{{required}}} placeholder"),
                    format!("e.g.: \"{}\"", kind.default_pattern()),
                );
            }
        }
    }
}
