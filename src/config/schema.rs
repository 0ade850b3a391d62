//! Configuration schema types for `demokit.toml`
//!
//! Defines the structure and validation rules for demokit configuration.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::assets::assets_folder_name;
use crate::sources::SourceLanguage;

/// Assets folder section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Subfolder name probed in each candidate directory
    #[serde(default = "default_assets_folder")]
    pub folder: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { folder: default_assets_folder() }
    }
}

fn default_assets_folder() -> String {
    assets_folder_name().to_string()
}

/// Demo source trees section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Directory containing the per-language demo folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// C++ demo folder, relative to `root`
    #[serde(default = "default_cpp_dir")]
    pub cpp_dir: String,
    /// Python demo folder, relative to `root`
    #[serde(default = "default_python_dir")]
    pub python_dir: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self { root: None, cpp_dir: default_cpp_dir(), python_dir: default_python_dir() }
    }
}

fn default_cpp_dir() -> String {
    SourceLanguage::Cpp.default_folder().to_string()
}

fn default_python_dir() -> String {
    SourceLanguage::Python.default_folder().to_string()
}

/// Demo launcher section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Where demo executables live (default: beside the running binary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exe_dir: Option<PathBuf>,
}

/// Logging section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "warn" or "demokit=debug"
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoKitConfig {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Config validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Dotted field path, e.g. "assets.folder"
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "demokit.toml: '{}' {}", self.field, self.message)
    }
}

impl DemoKitConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        check_folder_name(&mut errors, "assets.folder", &self.assets.folder, true);
        check_folder_name(&mut errors, "sources.cpp_dir", &self.sources.cpp_dir, false);
        check_folder_name(&mut errors, "sources.python_dir", &self.sources.python_dir, false);

        if self.sources.cpp_dir == self.sources.python_dir {
            errors.push(ConfigValidationError {
                field: "sources.python_dir".to_string(),
                message: "must differ from sources.cpp_dir".to_string(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "logging.filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Folder names are joined onto candidate directories, so they must stay
/// inside them. `allow_root` admits the browser build's "/".
fn check_folder_name(
    errors: &mut Vec<ConfigValidationError>,
    field: &str,
    value: &str,
    allow_root: bool,
) {
    if value.trim().is_empty() {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
        return;
    }
    if allow_root && value == "/" {
        return;
    }

    let path = Path::new(value);
    if path.is_absolute() || path.has_root() {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: format!("must be a relative folder name, got '{}'", value),
        });
    } else if path.components().any(|c| c == Component::ParentDir) {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: format!("must not contain '..', got '{}'", value),
        });
    }
}
