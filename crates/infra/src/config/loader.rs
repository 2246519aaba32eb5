//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file
//! 2. Without one, start from defaults (the agenda runs on example data)
//! 3. Apply environment overrides on top
//!
//! ## Environment Variables
//! - `AGENDA_BACKEND_URL`: Backend project URL
//! - `AGENDA_BACKEND_KEY`: Backend API key
//! - `AGENDA_BACKEND_TABLE`: Appointments table name
//! - `AGENDA_BACKEND_TIMEOUT_SECS`: Request timeout in seconds
//! - `AGENDA_BIND_ADDR`: HTTP listen address
//! - `AGENDA_SESSION_PATH`: Session file path
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./agenda.{json,toml}` or `./config.{json,toml}` (current working
//!    directory)
//! 2. The same names in the parent and grandparent directories
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use agenda_domain::{AgendaError, Config, Result};

const FILE_NAMES: [&str; 4] = ["agenda.json", "agenda.toml", "config.json", "config.toml"];

/// Load configuration: file (if any), then environment overrides.
///
/// # Errors
/// Returns `AgendaError::Config` if a config file exists but cannot be
/// parsed, or an override has an invalid value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AgendaError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AgendaError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AgendaError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AgendaError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Override file values with `AGENDA_*` environment variables.
///
/// Empty variables are ignored.
///
/// # Errors
/// Returns `AgendaError::Config` for a non-numeric timeout.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(url) = env_var("AGENDA_BACKEND_URL") {
        config.backend.url = Some(url);
    }
    if let Some(key) = env_var("AGENDA_BACKEND_KEY") {
        config.backend.api_key = Some(key);
    }
    if let Some(table) = env_var("AGENDA_BACKEND_TABLE") {
        config.backend.table = table;
    }
    if let Some(timeout) = env_var("AGENDA_BACKEND_TIMEOUT_SECS") {
        config.backend.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| AgendaError::Config(format!("Invalid backend timeout: {e}")))?;
    }
    if let Some(addr) = env_var("AGENDA_BIND_ADDR") {
        config.server.bind_addr = addr;
    }
    if let Some(path) = env_var("AGENDA_SESSION_PATH") {
        config.session.path = path;
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `AgendaError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AgendaError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AgendaError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its two parents, then the executable's
/// directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
