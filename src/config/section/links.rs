//! `[links]` section configuration.
//!
//! Blogroll and social links rendered in the sidebar. Each entry is exactly
//! one (label, URL) pair; list order is kept.
//!
//! # Example
//!
//! ```toml
//! [links]
//! blogroll = [
//!     ["Pelican", "http://getpelican.com/"],
//!     { label = "Python.org", url = "http://python.org/" },
//! ]
//! social = [["Another social link", "#"]]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Placeholder targets like `#` that point nowhere.
    pub fn is_placeholder(&self) -> bool {
        self.url.trim() == "#"
    }
}

/// Accepts `["label", "url"]` or `{ label = "...", url = "..." }`.
///
/// Unknown keys of the table form are skipped as `IgnoredAny`, so they
/// reach the unknown-field report like any other key.
impl<'de> Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(LinkVisitor)
    }
}

struct LinkVisitor;

impl<'de> Visitor<'de> for LinkVisitor {
    type Value = Link;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a [label, url] pair or a { label, url } table")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Link, A::Error> {
        let label: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let url: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        let mut len = 2;
        while seq.next_element::<IgnoredAny>()?.is_some() {
            len += 1;
        }
        if len != 2 {
            return Err(de::Error::invalid_length(len, &self));
        }
        Ok(Link { label, url })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Link, A::Error> {
        let mut label = None;
        let mut url = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "label" if label.is_some() => return Err(de::Error::duplicate_field("label")),
                "url" if url.is_some() => return Err(de::Error::duplicate_field("url")),
                "label" => label = Some(map.next_value()?),
                "url" => url = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(Link {
            label: label.ok_or_else(|| de::Error::missing_field("label"))?,
            url: url.ok_or_else(|| de::Error::missing_field("url"))?,
        })
    }
}

/// Links serialize back to the two-element form.
impl Serialize for Link {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.label, &self.url).serialize(serializer)
    }
}

/// Sidebar links as ["label", "url"] pairs, shown in list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "links")]
pub struct LinksConfig {
    /// External links in the blogroll widget.
    pub blogroll: Vec<Link>,

    /// Links in the social widget.
    pub social: Vec<Link>,
}

impl LinksConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_list(&self.blogroll, Self::FIELDS.blogroll, diag);
        Self::validate_list(&self.social, Self::FIELDS.social, diag);
    }

    fn validate_list(links: &[Link], field: FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for link in links {
            if link.label.trim().is_empty() {
                diag.error(field, format!("link to '{}' has an empty label", link.url));
            } else if !seen.insert(link.label.as_str()) {
                diag.warn(field, format!("duplicate label '{}'", link.label));
            }

            if link.is_placeholder() {
                diag.warn(field, format!("'{}' is a placeholder link", link.label));
            } else if let Err(problem) = check_link_url(&link.url) {
                diag.error_with_hint(
                    field,
                    format!("'{}': {}", link.label, problem),
                    "use an absolute URL like https://example.com/ or a site path like /about/",
                );
            }
        }
    }
}

/// Accept absolute URLs and relative references; reject anything unparsable.
fn check_link_url(raw: &str) -> Result<(), String> {
    if raw.trim().is_empty() {
        return Err("empty URL".into());
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(format!("URL '{raw}' contains whitespace"));
    }
    match url::Url::parse(raw) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = url::Url::parse("http://localhost/").map_err(|e| e.to_string())?;
            base.join(raw)
                .map(|_| ())
                .map_err(|e| format!("invalid relative URL '{raw}': {e}"))
        }
        Err(e) => Err(format!("invalid URL '{raw}': {e}")),
    }
}
