//! Site initialization module.
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub use config::generate_config_template;
pub use validate::InitMode;

/// Create a new site config.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the site root and default content directory
/// 3. Write `siteconf.toml`
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(root: &Path, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };
    validate::validate_target(root, mode)?;

    let content = root.join(SiteConfig::default().paths.content);
    fs::create_dir_all(&content)
        .with_context(|| format!("Failed to create '{}'", content.display()))?;
    config::write_config(root)?;

    log!("init"; "site config written to {}", root.display());
    Ok(())
}
