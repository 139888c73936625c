//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for champdex using the
//! `clap` crate. It provides command parsing, argument validation, and
//! helper methods for extracting command-specific data.
//!
//! # Commands
//!
//! - **browse**: Interactive catalog browser with search and detail panel (default)
//! - **fetch**: Download champion data from the Data Dragon CDN into the cache
//! - **show**: Print one champion's full record
//! - **list**: List all champions in catalog order
//! - **export**: Write the catalog to JSON or CSV
//! - **cache**: Inspect or clear the on-disk cache
//! - **config**: Manage configuration settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `b` for `browse`, `s` for `show`)
//! - Running with no command opens the browser
//!
//! # Examples
//!
//! ```
//! use champdex::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["champdex", "show", "Aatrox"]);
//! match cli.get_command() {
//!     Commands::Show { id } => assert_eq!(id, "Aatrox"),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format for the export command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Full catalog as a single JSON document
    #[default]
    Json,
    /// One row per champion with name, nickname, and skin count
    Csv,
}

/// Cache management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CacheCommands {
    /// Show cache location, size, and provenance
    Status,

    /// Delete the cached catalog
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Print the cache directory path
    Path,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., locale=ko_KR)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., locale)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "champdex")]
#[command(about = "A terminal champion catalog browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive catalog browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search query
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Disable splash artwork rendering
        #[arg(long = "no-artwork")]
        no_artwork: bool,
    },

    /// Download champion data into the local cache
    #[command(visible_alias = "f")]
    Fetch {
        /// Patch version to fetch (defaults to the latest published)
        #[arg(short = 'p', long = "patch", value_name = "PATCH")]
        patch: Option<String>,

        /// Locale code for names and descriptions (e.g., en_US, ko_KR)
        #[arg(short = 'l', long = "locale", value_name = "CODE")]
        locale: Option<String>,

        /// Also write the fetched catalog to a JSON file
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite an existing cache without prompting
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Print one champion's full record
    #[command(visible_alias = "s")]
    Show {
        /// Champion id or display name, case-insensitive (e.g., Aatrox, "miss fortune")
        #[arg(value_name = "ID")]
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_ids))
        )]
        id: String,
    },

    /// List all champions in catalog order
    #[command(visible_alias = "l")]
    List,

    /// Write the catalog to a file or stdout
    #[command(visible_alias = "e")]
    Export {
        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file path (prints to stdout if not specified)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Manage the on-disk cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            no_artwork: false,
        })
    }
}

impl Commands {
    /// Helper method to get the initial query from browse
    #[must_use]
    pub fn get_query_from_browse(&self) -> Option<String> {
        match self {
            Self::Browse { query, .. } => query.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browse() {
        let cli = Cli::parse_from(["champdex"]);
        assert!(cli.command.is_none());
        let cmd = cli.get_command();
        assert!(matches!(cmd, Commands::Browse { .. }));
    }

    #[test]
    fn test_explicit_browse_with_query() {
        let cli = Cli::parse_from(["champdex", "browse", "aatrox"]);
        let cmd = cli.get_command();
        assert_eq!(cmd.get_query_from_browse(), Some("aatrox".to_string()));
    }

    #[test]
    fn test_browse_alias() {
        let cli = Cli::parse_from(["champdex", "b", "--no-artwork"]);
        if let Some(Commands::Browse { no_artwork, .. }) = cli.command {
            assert!(no_artwork);
        } else {
            panic!("Expected Browse command");
        }
    }

    #[test]
    fn test_parse_fetch_flags() {
        let cli = Cli::parse_from([
            "champdex", "fetch", "-p", "15.1.1", "-l", "ko_KR", "--force",
        ]);
        if let Some(Commands::Fetch { patch, locale, output, force }) = cli.command {
            assert_eq!(patch, Some("15.1.1".to_string()));
            assert_eq!(locale, Some("ko_KR".to_string()));
            assert_eq!(output, None);
            assert!(force);
        } else {
            panic!("Expected Fetch command");
        }
    }

    #[test]
    fn test_fetch_defaults() {
        let cli = Cli::parse_from(["champdex", "fetch"]);
        if let Some(Commands::Fetch { patch, locale, force, .. }) = cli.command {
            assert!(patch.is_none());
            assert!(locale.is_none());
            assert!(!force);
        } else {
            panic!("Expected Fetch command");
        }
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["champdex", "show"]).is_err());

        let cli = Cli::parse_from(["champdex", "show", "MissFortune"]);
        if let Some(Commands::Show { id }) = cli.command {
            assert_eq!(id, "MissFortune");
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn test_export_format_defaults_to_json() {
        let cli = Cli::parse_from(["champdex", "export"]);
        if let Some(Commands::Export { format, output }) = cli.command {
            assert_eq!(format, ExportFormat::Json);
            assert!(output.is_none());
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_export_csv_to_file() {
        let cli = Cli::parse_from(["champdex", "export", "-f", "csv", "-o", "out.csv"]);
        if let Some(Commands::Export { format, output }) = cli.command {
            assert_eq!(format, ExportFormat::Csv);
            assert_eq!(output, Some(PathBuf::from("out.csv")));
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_cache_clear_force() {
        let cli = Cli::parse_from(["champdex", "cache", "clear", "-f"]);
        if let Some(Commands::Cache { command: CacheCommands::Clear { force } }) = cli.command {
            assert!(force);
        } else {
            panic!("Expected Cache Clear command");
        }
    }

    #[test]
    fn test_config_set_key_value() {
        let cli = Cli::parse_from(["champdex", "config", "set", "locale=ko_KR"]);
        if let Some(Commands::Config { command: ConfigCommands::Set { setting } }) = cli.command {
            assert_eq!(setting, "locale=ko_KR");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn test_quiet_is_global() {
        let cli = Cli::parse_from(["champdex", "list", "-q"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::parse_from(["champdex", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }
}
