//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Load, check and export static blog settings
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override `site.url`, e.g. for CI deployments to another host
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override `paths.content` (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Override `theme.path`
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub theme: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented default config file
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the config file and referenced directories
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown config keys as errors
        #[arg(short, long)]
        deny_unknown: bool,
    },

    /// Print the settings record handed to the generator
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
    },

    /// Print a single setting (e.g. `SITEURL`)
    #[command(visible_alias = "g")]
    Get {
        /// Setting name, case-insensitive
        key: String,
    },
}

/// Output format of `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    #[default]
    Json,
    Toml,
}

impl Cli {
    /// Whether unknown config keys should fail loading.
    pub const fn deny_unknown(&self) -> bool {
        matches!(
            self.command,
            Commands::Check {
                deny_unknown: true
            }
        )
    }
}
