//! Configuration file discovery and loading.
//!
//! imagegate reads a single `imagegate.yml` (or `imagegate.yaml`) from the
//! project root, unless an explicit path is given. A missing project config
//! is not an error: every field can also come from the command line.

use crate::config::schema::ImagegateConfig;
use crate::error::{ImagegateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked up in the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["imagegate.yml", "imagegate.yaml"];

/// Find the project config in `project_root`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file and parse it into ImagegateConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ImagegateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ImagegateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ImagegateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ImagegateConfig.
///
/// An empty document yields the default configuration.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ImagegateConfig> {
    if content.trim().is_empty() {
        return Ok(ImagegateConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ImagegateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project root is searched and the default configuration is used when
/// nothing is found.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<ImagegateConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("Loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config file in {}, using defaults", project_root.display());
            Ok(ImagegateConfig::default())
        }
    }
}
