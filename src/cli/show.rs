//! `siteconf show` / `siteconf get`: print the exported settings.

use anyhow::{Result, bail};
use std::io::Write;

use super::ShowFormat;
use crate::config::SiteConfig;
use crate::settings::Settings;

/// Print the whole settings record to stdout.
pub fn show_settings(config: &SiteConfig, format: ShowFormat) -> Result<()> {
    let rendered = render(&config.to_settings(), format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(())
}

/// Print a single setting value to stdout.
pub fn get_setting(config: &SiteConfig, key: &str) -> Result<()> {
    let settings = config.to_settings();
    let value = lookup(&settings, key)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", value)?;
    Ok(())
}

fn render(settings: &Settings, format: ShowFormat) -> Result<String> {
    match format {
        ShowFormat::Json => settings.to_json_pretty(),
        ShowFormat::Toml => settings.to_toml(),
    }
}

fn lookup(settings: &Settings, key: &str) -> Result<String> {
    match settings.get(key) {
        Some(value) => Ok(Settings::render_value(value)),
        None => {
            let known: Vec<_> = settings.keys().collect();
            bail!("unknown setting `{key}`, expected one of: {}", known.join(", "))
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
    fn test_render_json_parses_back() {
        let text = render(&sample(), ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["DEFAULT_LANG"], "en");
        assert!(value["FEED_ALL_ATOM"].is_null());
    }

    #[test]
    fn test_render_toml() {
        let text = render(&sample(), ShowFormat::Toml).unwrap();
        assert!(text.contains("TIMEZONE = \"America/New_York\""));
    }

    #[test]
    fn test_lookup() {
        let settings = sample();
        assert_eq!(lookup(&settings, "siteurl").unwrap(), "http://erichardy.pythonanywhere.com/blog");
        assert_eq!(lookup(&settings, "DEFAULT_PAGINATION").unwrap(), "false");
        let err = lookup(&settings, "NOPE").unwrap_err();
        assert!(err.to_string().contains("SITENAME"));
    }
}
