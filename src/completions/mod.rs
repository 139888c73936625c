//! Shell completion support for champdex
//!
//! # Architecture
//!
//! This module uses a hybrid approach:
//! - **Static completions** (always available): subcommands, flags, shells,
//!   config keys
//! - **Dynamic completions** (behind `dynamic-completions` feature): champion
//!   ids read from the cached catalog
//!
//! # Feature Flags
//!
//! - Default: Static completions only (no extra dependencies)
//! - `dynamic-completions`: Enables catalog lookups for id completion

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions to stdout
///
/// This generates traditional shell completion scripts that provide
/// static completions for commands, flags, and value hints.
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

/// Initialize dynamic completion system
///
/// Call this at the start of main() before argument parsing when
/// the `dynamic-completions` feature is enabled.
///
/// This checks for the `COMPLETE` environment variable and handles
/// completion requests before normal command execution.
#[cfg(feature = "dynamic-completions")]
pub fn init_dynamic_completions<F: Fn() -> Command>(factory: F) {
    clap_complete::CompleteEnv::with_factory(factory).complete();
}

/// Complete champion ids for the `show` ID argument
///
/// This is the entry point for ArgValueCompleter. It returns candidates
/// from the cached catalog based on what the user has typed, with the
/// champion's display name as help text.
#[cfg(feature = "dynamic-completions")]
pub fn complete_ids(current: &std::ffi::OsStr) -> Vec<clap_complete::engine::CompletionCandidate> {
    use clap_complete::engine::CompletionCandidate;

    let current_str = current.to_string_lossy();
    let current_lower = current_str.to_lowercase();

    load_cached_ids()
        .into_iter()
        .filter(|(id, _)| {
            let id_lower = id.to_lowercase();
            id_lower.starts_with(&current_lower) || id_lower.contains(&current_lower)
        })
        .take(50)
        .map(|(id, name)| CompletionCandidate::new(id).help(Some(name.into())))
        .collect()
}

/// Safely load (id, display name) pairs from the cached catalog
///
/// Only the session cache is consulted; a cold cache yields no candidates.
/// Returns an empty vec on any error so TAB completion never fails.
#[cfg(feature = "dynamic-completions")]
fn load_cached_ids() -> Vec<(String, String)> {
    use crate::catalog::DataStore;

    let Ok(store) = DataStore::open(None) else {
        return Vec::new();
    };
    let Ok(catalog) = store.load() else {
        return Vec::new();
    };

    catalog
        .iter()
        .map(|(id, entry)| (id.to_string(), entry.name.clone()))
        .collect()
}
