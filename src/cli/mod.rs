//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod launch;
mod list;
mod locate;
mod open;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::loader::find_config;
use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::logging;
use crate::sources::SourceLanguage;

pub use show::LanguageChoice;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Demokit - find demo assets, show demo sources, launch demos
#[derive(Parser)]
#[command(name = "demokit")]
#[command(about = "Demokit - find demo assets, show demo sources, launch demos and open URLs")]
#[command(version)]
pub struct Cli {
    /// Config file (default: demokit.toml found upward from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Assets folder name to search for (default: demos_assets/)
    #[arg(long, global = true)]
    pub assets_folder: Option<String>,

    /// Directory containing the demo source folders
    #[arg(long, global = true)]
    pub sources_root: Option<PathBuf>,

    /// Directory containing demo executables (default: beside this binary)
    #[arg(long, global = true)]
    pub exe_dir: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "demokit=trace" (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the assets folder and change into the directory that holds it
    Locate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the source code of a demo
    Show {
        /// Demo name, relative to the language folder, without extension
        demo: String,

        /// Which version to print
        #[arg(long, value_enum, default_value = "both")]
        lang: LanguageChoice,
    },

    /// List demos found in the source folders
    List {
        /// Only list demos in this language
        #[arg(long, value_enum)]
        lang: Option<SourceLanguage>,
    },

    /// Launch a demo executable that sits beside this binary
    Launch {
        /// Demo executable name, without platform extension
        name: String,
    },

    /// Open a URL in the default browser
    Open {
        /// URL to open
        url: String,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        assets_folder: cli.assets_folder,
        sources_root: cli.sources_root,
        exe_dir: cli.exe_dir,
        log: cli.log,
    };

    let config_path = cli.config.clone().or_else(find_config);
    let mut config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    merge_cli_overrides(&mut config, &overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for error in errors {
            eprintln!("Error: {}", error);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    // The subscriber needs the merged filter, so config loading is reported here
    logging::init(Some(&config.logging.filter));
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "configuration loaded"),
        None => tracing::debug!("no demokit.toml found, using defaults"),
    }

    match cli.command {
        Commands::Locate { json } => locate::run_locate(&config, json),
        Commands::Show { demo, lang } => show::run_show(&config, &demo, lang),
        Commands::List { lang } => list::run_list(&config, lang),
        Commands::Launch { name } => launch::run_launch(&config, &name),
        Commands::Open { url } => open::run_open(&url),
    }
}
