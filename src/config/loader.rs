//! Configuration loading and discovery for `demokit.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::DemoKitConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "demokit.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse demokit.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override assets folder name
    pub assets_folder: Option<String>,
    /// Override demo sources root
    pub sources_root: Option<PathBuf>,
    /// Override demo executable directory
    pub exe_dir: Option<PathBuf>,
    /// Override logging filter
    pub log: Option<String>,
}

/// Find demokit.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for demokit.toml
/// 2. Check XDG_CONFIG_HOME/demokit/demokit.toml (or ~/.config/demokit/demokit.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find demokit.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("demokit").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find demokit.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a demokit.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// Relative `sources.root` and `launcher.exe_dir` values are resolved against
/// the directory containing the config file.
pub fn load_config(path: Option<&Path>) -> Result<DemoKitConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<DemoKitConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let mut config: DemoKitConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(root) = project_root(path) {
        let root = root.to_path_buf();
        config.sources.root = config.sources.root.map(|p| resolve_path(&root, &p));
        config.launcher.exe_dir = config.launcher.exe_dir.map(|p| resolve_path(&root, &p));
    }

    Ok(config)
}

/// Configuration used when no demokit.toml is found.
pub fn default_config() -> DemoKitConfig {
    DemoKitConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut DemoKitConfig, overrides: &CliOverrides) {
    if let Some(ref folder) = overrides.assets_folder {
        config.assets.folder = folder.clone();
    }

    if let Some(ref root) = overrides.sources_root {
        config.sources.root = Some(root.clone());
    }

    if let Some(ref exe_dir) = overrides.exe_dir {
        config.launcher.exe_dir = Some(exe_dir.clone());
    }

    if let Some(ref log) = overrides.log {
        config.logging.filter = log.clone();
    }
}

/// Directory containing a config file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
