use std::path::PathBuf;

use clap::Parser;

use cahier_config::GeneralConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cahier` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cahier",
    version,
    about = "Cahier de textes - admin and professor client for the teaching logbook API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL, e.g. https://cahier.example.ma/api
    #[arg(long, global = true, env = "CAHIER_BASE_URL")]
    pub base_url: Option<String>,

    /// Session file holding the token and signed-in user
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, general: &GeneralConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&general.default_format)),
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
            session_file: self.session_file.clone(),
        }
    }
}
