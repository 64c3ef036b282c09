//! siteconf - load, check and export static blog settings.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use siteconf::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // `init` runs before any config file exists
    let load = || SiteConfig::load(&cli);

    match &cli.command {
        Commands::Init { name, dry } => {
            let cwd = std::env::current_dir()?;
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            cli::init::new_site(&root, name.is_some(), *dry)
        }
        Commands::Check { .. } => cli::check::check_site(&load()?),
        Commands::Show { format } => cli::show::show_settings(&load()?, *format),
        Commands::Get { key } => cli::show::get_setting(&load()?, key),
    }
}
