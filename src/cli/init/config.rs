//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;
use crate::config::section::{
    BuildConfig, FeedConfig, LinksConfig, PathsConfig, SiteInfoConfig, ThemeConfig,
};

/// Generate `siteconf.toml` content with comments
pub fn generate_config_template() -> String {
    let sections = [
        SiteInfoConfig::template_with_header(),
        PathsConfig::template_with_header(),
        BuildConfig::template_with_header(),
        FeedConfig::template_with_header(),
        LinksConfig::template_with_header(),
        ThemeConfig::template_with_header(),
    ];

    let mut out = format!(
        "# siteconf configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out
}

/// Write default `siteconf.toml`
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}
