//! `[site]` section configuration.
//!
//! Identity and locale of the site.
//!
//! # Example
//!
//! ```toml
//! [site]
//! author = "Eric Hardy"
//! name = "Done Is Better Than Perfect"
//! url = "http://erichardy.pythonanywhere.com/blog"
//! timezone = "America/New_York"
//! language = "en"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// BCP 47 shape: primary language subtag plus optional script/region/variant subtags.
static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("language tag regex is valid")
});

/// Site identity and locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Attributed author of generated content.
    pub author: String,

    /// Displayed site title.
    #[config(default = "My Blog")]
    pub name: String,

    /// Base URL for generated links (e.g., "https://example.com/blog").
    /// Required once any feed is enabled.
    pub url: Option<String>,

    /// IANA timezone used for date formatting.
    pub timezone: String,

    /// Language code for generated pages (e.g., "en", "zh-Hans").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            name: String::new(),
            url: None,
            timezone: "UTC".into(),
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// `feeds_enabled` tells whether any `[feed]` toggle is on, since feeds
    /// carry absolute links and need `url`.
    pub fn validate(&self, feeds_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name must not be empty",
                "e.g.: name = \"My Blog\"",
            );
        }

        if self.author.trim().is_empty() {
            diag.hint(Self::FIELDS.author, "no author set, pages will be unattributed");
        }

        if feeds_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("feeds are enabled but {} is not configured", Self::FIELDS.url),
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        }

        if let Some(url_str) = &self.url {
            self.validate_url(url_str, diag);
        }

        if self.timezone.parse::<chrono_tz::Tz>().is_err() {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("unknown timezone '{}'", self.timezone),
                "use an IANA identifier such as \"UTC\" or \"America/New_York\"",
            );
        }

        if !LANGUAGE_TAG.is_match(&self.language) {
            diag.error_with_hint(
                Self::FIELDS.language,
                format!("invalid language code '{}'", self.language),
                "use a BCP 47 code such as \"en\", \"pt-BR\" or \"zh-Hans\"",
            );
        }
    }

    fn validate_url(&self, url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if url_str.ends_with('/') {
                    diag.warn(
                        Self::FIELDS.url,
                        "trailing '/' produces double slashes in generated links",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
