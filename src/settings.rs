//! Flat settings record handed to the site generator.
//!
//! Keys use the generator's setting names and always come out in the same
//! order, so exporting the same config twice gives byte-identical output.
//!
//! | Key                     | Source                  |
//! |-------------------------|-------------------------|
//! | `AUTHOR`                | `site.author`           |
//! | `SITENAME`              | `site.name`             |
//! | `SITEURL`               | `site.url`              |
//! | `PATH`                  | `paths.content`         |
//! | `STATIC_PATHS`          | `paths.static`          |
//! | `ARTICLE_PATHS`         | `paths.articles`        |
//! | `ARTICLE_URL`           | `paths.article_url`     |
//! | `ARTICLE_SAVE_AS`       | `paths.article_save_as` |
//! | `TIMEZONE`              | `site.timezone`         |
//! | `DEFAULT_LANG`          | `site.language`         |
//! | `FEED_ALL_ATOM` ...     | `feed.*`                |
//! | `LINKS`                 | `links.blogroll`        |
//! | `SOCIAL`                | `links.social`          |
//! | `DEFAULT_PAGINATION`    | `build.pagination`      |
//! | `RELATIVE_URLS`         | `build.relative_urls`   |
//! | `THEME`                 | `theme.path`            |

use crate::config::{FeedKind, Link, SiteConfig};
use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::path::Path;

/// Ordered generator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings(Map<String, Value>);

impl SiteConfig {
    /// Export the record under the generator's setting names.
    pub fn to_settings(&self) -> Settings {
        let mut map = Map::new();
        let mut put = |key: &str, value: Value| {
            map.insert(key.to_string(), value);
        };

        put("AUTHOR", json!(self.site.author));
        put("SITENAME", json!(self.site.name));
        put("SITEURL", json!(self.site.url.as_deref().unwrap_or_default()));
        put("PATH", path_value(&self.paths.content));
        put("STATIC_PATHS", paths_value(&self.paths.static_paths));
        put("ARTICLE_PATHS", paths_value(&self.paths.articles));
        if let Some(pattern) = &self.paths.article_url {
            put("ARTICLE_URL", json!(pattern));
        }
        if let Some(pattern) = &self.paths.article_save_as {
            put("ARTICLE_SAVE_AS", json!(pattern));
        }
        put("TIMEZONE", json!(self.site.timezone));
        put("DEFAULT_LANG", json!(self.site.language));

        for kind in FeedKind::ALL {
            put(kind.setting_key(), json!(self.feed.get(kind).pattern()));
        }

        put("LINKS", links_value(&self.links.blogroll));
        put("SOCIAL", links_value(&self.links.social));
        put(
            "DEFAULT_PAGINATION",
            match self.build.pagination.page_size() {
                Some(size) => json!(size),
                None => json!(false),
            },
        );
        put("RELATIVE_URLS", json!(self.build.relative_urls));
        put("THEME", path_value(&self.theme.path));

        Settings(map)
    }
}

fn path_value(path: &Path) -> Value {
    json!(path.to_string_lossy())
}

fn paths_value(paths: &[impl AsRef<Path>]) -> Value {
    Value::Array(paths.iter().map(|p| path_value(p.as_ref())).collect())
}

fn links_value(links: &[Link]) -> Value {
    Value::Array(links.iter().map(|l| json!([l.label, l.url])).collect())
}

impl Settings {
    /// Look up a setting; key matching ignores ASCII case.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&key.to_ascii_uppercase())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0).context("Failed to serialize settings as JSON")
    }

    /// TOML has no null: disabled feeds are left out.
    pub fn to_toml(&self) -> Result<String> {
        let table: Map<String, Value> = self
            .0
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        toml::to_string(&table).context("Failed to serialize settings as TOML")
    }

    /// Render one value for shell use: strings bare, everything else as JSON.
    pub fn render_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_CONFIG;

    fn sample() -> Settings {
        SiteConfig::from_str(SAMPLE_CONFIG).unwrap().to_settings()
    }

    #[test]
    fn test_sample_settings() {
        let settings = sample();
        assert_eq!(settings.get("AUTHOR"), Some(&json!("Eric Hardy")));
        assert_eq!(
            settings.get("SITEURL"),
            Some(&json!("http://erichardy.pythonanywhere.com/blog"))
        );
        assert_eq!(settings.get("STATIC_PATHS"), Some(&json!(["blog", "downloads"])));
        assert_eq!(settings.get("ARTICLE_PATHS"), Some(&json!(["blog"])));
        assert_eq!(settings.get("TIMEZONE"), Some(&json!("America/New_York")));
        assert_eq!(settings.get("FEED_ALL_ATOM"), Some(&Value::Null));
        assert_eq!(settings.get("AUTHOR_FEED_RSS"), Some(&Value::Null));
        assert_eq!(settings.get("DEFAULT_PAGINATION"), Some(&json!(false)));
        assert_eq!(settings.get("THEME"), Some(&json!("./current-theme/elegant")));
        assert!(settings.get("ARTICLE_URL").is_none());

        let links = settings.get("LINKS").unwrap().as_array().unwrap();
        assert_eq!(links.len(), 4);
        assert!(links.iter().all(|pair| pair.as_array().unwrap().len() == 2));
        assert_eq!(links[0], json!(["Pelican", "http://getpelican.com/"]));
    }

    #[test]
    fn test_key_order() {
        let settings = sample();
        let keys: Vec<_> = settings.keys().collect();
        assert_eq!(keys.first(), Some(&"AUTHOR"));
        assert_eq!(keys.last(), Some(&"THEME"));
        let feed_pos = keys.iter().position(|k| *k == "FEED_ALL_ATOM").unwrap();
        assert_eq!(keys[feed_pos + 4], "AUTHOR_FEED_RSS");
    }

    #[test]
    fn test_get_ignores_case() {
        let settings = sample();
        assert_eq!(settings.get("sitename"), settings.get("SITENAME"));
        assert!(settings.get("nope").is_none());
    }

    #[test]
    fn test_enabled_feed_and_pagination() {
        let config = SiteConfig::from_str(
            "[site]\nname = \"x\"\n[feed]\nall_atom = true\n[build]\npagination = 5",
        )
        .unwrap();
        let settings = config.to_settings();
        assert_eq!(settings.get("FEED_ALL_ATOM"), Some(&json!("feeds/all.atom.xml")));
        assert_eq!(settings.get("DEFAULT_PAGINATION"), Some(&json!(5)));
        assert_eq!(settings.get("SITEURL"), Some(&json!("")));
    }

    #[test]
    fn test_export_is_deterministic() {
        assert_eq!(sample().to_json_pretty().unwrap(), sample().to_json_pretty().unwrap());
        assert_eq!(sample().to_toml().unwrap(), sample().to_toml().unwrap());
    }

    #[test]
    fn test_toml_export_drops_disabled_feeds() {
        let text = sample().to_toml().unwrap();
        assert!(!text.contains("FEED_ALL_ATOM"));
        let parsed: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(parsed["SITENAME"].as_str(), Some("Done Is Better Than Perfect"));
        assert_eq!(parsed["SOCIAL"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_render_value() {
        assert_eq!(Settings::render_value(&json!("en")), "en");
        assert_eq!(Settings::render_value(&json!(false)), "false");
        assert_eq!(Settings::render_value(&Value::Null), "");
        assert_eq!(Settings::render_value(&json!(["blog"])), "[\"blog\"]");
    }
}
