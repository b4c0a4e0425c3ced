//! Common paths for Crossperch data storage
//!
//! All Crossperch data is stored under ~/.config/crossperch/ on all platforms:
//! - config.toml - User configuration

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the Crossperch data directory (~/.config/crossperch/)
///
/// This is consistent across all platforms for simplicity.
pub fn crossperch_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let dir = home.join(".config").join("crossperch");
    fs::create_dir_all(&dir).context("Failed to create crossperch directory")?;
    Ok(dir)
}

/// Get the config file path (~/.config/crossperch/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(crossperch_dir()?.join("config.toml"))
}
