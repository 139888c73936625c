//! Champdex CLI application entry point
//!
//! This is the main executable for the champdex champion catalog browser. It
//! provides a terminal browser over the champion roster plus a set of
//! non-interactive commands for fetching, inspecting, and exporting the data.
//!
//! # Features
//!
//! - **Browse Mode**: Searchable card grid with a splash-art detail panel
//! - **Fetch**: Download champion data from the Data Dragon CDN into a cache
//! - **Roster Commands**: Show, list, and export champions from the cache
//! - **Cache Management**: Inspect provenance or clear the cached dataset
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog interactively (default command)
//! champdex
//! champdex browse aatrox
//!
//! # Download the latest patch into the cache
//! champdex fetch
//! champdex fetch -p 15.1.1 -l ko_KR
//!
//! # Inspect one champion
//! champdex show MissFortune
//!
//! # Export the roster
//! champdex export -f csv -o champions.csv
//!
//! # Quiet mode (only output results)
//! champdex -q list
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/champdex/config.toml` on Linux). The cached dataset lives in
//! the user's cache directory (`~/.cache/champdex` on Linux).

use champdex::{
    ChampdexError,
    catalog::DataStore,
    cli::{Cli, Commands},
    commands, completions,
    config::ChampdexConfig,
};
use clap::CommandFactory;

type Result<T> = std::result::Result<T, ChampdexError>;

/// Main entry point for the champdex application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler. Commands that need champion data open the
/// catalog store first; `config` and `completions` run without it.
///
/// # Errors
///
/// Returns `ChampdexError` if configuration loading fails, the store cannot
/// be opened, or any command handler returns an error.
fn main() -> Result<()> {
    #[cfg(feature = "dynamic-completions")]
    completions::init_dynamic_completions(Cli::command);

    let config = ChampdexConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    match &command {
        Commands::Config { command } => {
            return commands::config(&config, command, quiet);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            completions::generate_static(*shell, &mut cmd, &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let store = DataStore::open(config.dataset.clone())?;

    match command {
        Commands::Browse { query, no_artwork } => {
            let artwork = config.artwork && !no_artwork;
            commands::browse(&store, query, artwork)
        }
        Commands::Fetch {
            patch,
            locale,
            output,
            force,
        } => commands::fetch(
            &store,
            &config,
            patch,
            locale,
            output.as_deref(),
            force,
            quiet,
        ),
        Commands::Show { id } => {
            let catalog = store.load()?;
            commands::show(&catalog, &id, quiet)
        }
        Commands::List => {
            let catalog = store.load()?;
            commands::list(&catalog, quiet)
        }
        Commands::Export { format, output } => {
            let catalog = store.load()?;
            commands::export(&catalog, format, output.as_deref(), quiet)
        }
        Commands::Cache { command } => commands::cache(&store, &command, quiet),
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }
}
