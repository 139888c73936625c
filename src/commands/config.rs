//! Config command - show, get, and set configuration values

use crate::{ChampdexError, cli::ConfigCommands, config::ChampdexConfig};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ChampdexError>;

const VALID_KEYS: &str = "dataset, locale, patch, artwork, quiet";

/// Execute a config subcommand
///
/// `set` takes `KEY=VALUE`; an empty value unsets the optional keys
/// (`dataset`, `patch`).
///
/// # Errors
/// Returns an error for unknown keys, unparseable values, or a failed
/// config save
pub fn execute(config: &ChampdexConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(config),
        ConfigCommands::Path => {
            println!("{}", ChampdexConfig::config_path()?.display());
            Ok(())
        }
        ConfigCommands::Set { setting } => set(config, setting, quiet),
        ConfigCommands::Get { key } => get(config, key),
    }
}

fn show(config: &ChampdexConfig) -> Result<()> {
    let text = toml::to_string_pretty(config)
        .map_err(|e| ::config::ConfigError::Message(format!("Failed to serialize config: {e}")))?;
    print!("{text}");
    Ok(())
}

fn get(config: &ChampdexConfig, key: &str) -> Result<()> {
    let value = match key {
        "dataset" => config
            .dataset
            .as_ref()
            .map_or_else(|| "unset".to_string(), |p| p.display().to_string()),
        "locale" => config.locale.clone(),
        "patch" => config.patch.clone().unwrap_or_else(|| "latest".to_string()),
        "artwork" => config.artwork.to_string(),
        "quiet" => config.quiet.to_string(),
        other => {
            return Err(ChampdexError::InvalidInput(format!(
                "Unknown configuration key: '{other}'. Available keys: {VALID_KEYS}"
            )));
        }
    };
    println!("{value}");
    Ok(())
}

fn set(config: &ChampdexConfig, setting: &str, quiet: bool) -> Result<()> {
    let (key, value) = setting.split_once('=').ok_or_else(|| {
        ChampdexError::InvalidInput(format!(
            "Invalid format: '{setting}'. Use: champdex config set key=value"
        ))
    })?;
    let key = key.trim();
    let value = value.trim();

    let updated = apply(config, key, value)?;
    updated.save()?;

    if !quiet {
        if value.is_empty() {
            println!("Unset {key}");
        } else {
            println!("Set {key} = {value}");
        }
    }
    Ok(())
}

/// Apply one key update to a copy of the configuration
fn apply(config: &ChampdexConfig, key: &str, value: &str) -> Result<ChampdexConfig> {
    let mut updated = config.clone();
    match key {
        "dataset" => {
            updated.dataset = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        "locale" => {
            if value.is_empty() {
                return Err(ChampdexError::InvalidInput(
                    "Locale cannot be empty".to_string(),
                ));
            }
            updated.locale = value.to_string();
        }
        "patch" => {
            updated.patch = (!value.is_empty()).then(|| value.to_string());
        }
        "artwork" => updated.artwork = parse_bool(key, value)?,
        "quiet" => updated.quiet = parse_bool(key, value)?,
        other => {
            return Err(ChampdexError::InvalidInput(format!(
                "Unknown configuration key: '{other}'. Available keys: {VALID_KEYS}"
            )));
        }
    }
    Ok(updated)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| {
        ChampdexError::InvalidInput(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}
