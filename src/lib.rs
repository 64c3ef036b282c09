//! siteconf - typed settings for a static blog generator.
//!
//! A `siteconf.toml` file is loaded into a [`config::SiteConfig`], checked
//! against its rules, then exported as the flat [`settings::Settings`]
//! record the generator consumes.

pub mod cli;
pub mod config;
pub mod logger;
pub mod settings;
