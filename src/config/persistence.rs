//! Configuration file persistence for marklite
//!
//! This module handles loading and saving the settings file in the
//! platform-specific configuration directory, with graceful fallback to
//! defaults when the file is missing or unreadable.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "marklite";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Extension of the temporary file used during atomic writes
const BACKUP_EXTENSION: &str = "json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Platform configuration directory for marklite.
///
/// - **Windows**: `%APPDATA%\marklite\`
/// - **macOS**: `~/Library/Application Support/marklite/`
/// - **Linux**: `~/.config/marklite/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the platform directory cannot be
/// determined (e.g. `HOME` is unset).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Full path to the default configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from the default location, falling back to defaults on
/// any error.
pub fn load_config() -> Settings {
    get_config_file_path()
        .and_then(|path| read_settings(&path))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load settings from an explicit path, falling back to defaults on any error.
pub fn load_config_from(path: &Path) -> Settings {
    read_settings(path).unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Read and sanitize a settings file. A missing or empty file yields defaults.
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!("Configuration loaded from {}", path.display());
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to the default location.
pub fn save_config(settings: &Settings) -> Result<PathBuf> {
    let path = get_config_file_path()?;
    save_config_to(settings, &path)?;
    Ok(path)
}

/// Save settings to `path`, creating parent directories as needed.
///
/// The JSON is written to a sibling `.bak` file first and then renamed over
/// the target, so a failed write never leaves a truncated config behind.
pub fn save_config_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            debug!("Creating config directory: {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| Error::ConfigSave {
                path: dir.to_path_buf(),
                source: Box::new(e),
            })?;
        }
    }

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let backup_path = path.with_extension(BACKUP_EXTENSION);
    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    if let Err(e) = fs::rename(&backup_path, path) {
        if let Err(cleanup) = fs::remove_file(&backup_path) {
            warn!(
                "Failed to remove temporary config file {}: {}",
                backup_path.display(),
                cleanup
            );
        }
        return Err(Error::ConfigSave {
            path: path.to_path_buf(),
            source: Box::new(e),
        });
    }

    info!("Configuration saved to {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
