//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! pagination = 10        # false | true | page size
//! relative_urls = false
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Page size used when pagination is switched on with `true`.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Article paging and URL style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Paging of article lists: false, true (10 per page) or a page size.
    pub pagination: Pagination,

    /// Emit document-relative URLs (handy while developing locally).
    #[config(status = experimental)]
    pub relative_urls: bool,
}

impl BuildConfig {
    /// Feeds are read outside the site, so their links must stay absolute.
    pub fn validate(&self, feeds_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.relative_urls && feeds_enabled {
            diag.warn(
                Self::FIELDS.relative_urls,
                "document-relative URLs produce broken links inside feeds",
            );
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Article list paging: off, or on with a page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PaginationValue")]
pub enum Pagination {
    #[default]
    Disabled,
    PerPage(NonZeroU32),
}

impl Pagination {
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::PerPage(_))
    }

    pub const fn page_size(&self) -> Option<u32> {
        match self {
            Self::Disabled => None,
            Self::PerPage(n) => Some(n.get()),
        }
    }
}

/// Raw TOML forms accepted for `build.pagination`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaginationValue {
    Switch(bool),
    PerPage(i64),
}

impl TryFrom<PaginationValue> for Pagination {
    type Error = String;

    fn try_from(value: PaginationValue) -> Result<Self, Self::Error> {
        match value {
            PaginationValue::Switch(false) => Ok(Self::Disabled),
            PaginationValue::Switch(true) => Ok(Self::PerPage(DEFAULT_PAGE_SIZE)),
            PaginationValue::PerPage(n) => u32::try_from(n)
                .ok()
                .and_then(NonZeroU32::new)
                .map(Self::PerPage)
                .ok_or_else(|| format!("pagination must be a positive page size, got {n}")),
        }
    }
}

impl Serialize for Pagination {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::PerPage(n) => serializer.serialize_u32(n.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.pagination, Pagination::Disabled);
        assert!(!config.build.relative_urls);
    }

    #[test]
    fn test_pagination_forms() {
        let config = test_parse_config("[build]\npagination = false");
        assert!(!config.build.pagination.is_enabled());

        let config = test_parse_config("[build]\npagination = true");
        assert_eq!(config.build.pagination.page_size(), Some(10));

        let config = test_parse_config("[build]\npagination = 5\nrelative_urls = true");
        assert_eq!(config.build.pagination.page_size(), Some(5));
        assert!(config.build.relative_urls);
    }

    #[test]
    fn test_pagination_rejects_non_positive() {
        for value in ["0", "-3", "\"ten\""] {
            let content = format!("[site]\nname = \"Test\"\n[build]\npagination = {value}");
            assert!(SiteConfig::from_str(&content).is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_relative_urls_with_feeds_warns() {
        let build = BuildConfig {
            relative_urls: true,
            ..BuildConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(false, &mut diag);
        assert!(diag.warnings().is_empty());

        build.validate(true, &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].0, BuildConfig::FIELDS.relative_urls);
    }

    #[test]
    fn test_relative_urls_is_experimental() {
        let mut diag = ConfigDiagnostics::new();
        BuildConfig::default().validate_field_status(&mut diag);
        assert!(diag.hints().is_empty());

        let build = BuildConfig {
            relative_urls: true,
            ..BuildConfig::default()
        };
        build.validate_field_status(&mut diag);
        assert_eq!(diag.hints().len(), 1);
        assert_eq!(diag.hints()[0].0.as_str(), "build.relative_urls");
    }

    #[test]
    fn test_pagination_serializes_back() {
        let value = toml::Value::try_from(BuildConfig {
            pagination: Pagination::PerPage(NonZeroU32::new(7).unwrap()),
            relative_urls: false,
        })
        .unwrap();
        assert_eq!(value["pagination"].as_integer(), Some(7));

        let value = toml::Value::try_from(BuildConfig::default()).unwrap();
        assert_eq!(value["pagination"].as_bool(), Some(false));
    }
}
