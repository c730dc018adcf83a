//! Configuration schema definitions for imagegate.
//!
//! This module contains the struct definitions that map to the
//! `imagegate.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::steps::PreValidateStep;

/// Root configuration structure for imagegate.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagegateConfig {
    /// Name the built image will be registered under
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_name: String,

    /// Owner accounts to restrict the catalog lookup to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,

    /// Skip the name check and accept overwriting an existing image
    #[serde(skip_serializing_if = "is_false")]
    pub force_overwrite: bool,

    /// Where to look up existing images
    pub catalog: CatalogConfig,

    /// Global settings
    pub settings: Settings,
}

impl ImagegateConfig {
    /// Build the pre-validation step described by this configuration.
    pub fn prevalidate_step(&self) -> PreValidateStep {
        PreValidateStep::new(
            self.destination_name.clone(),
            self.owners.clone(),
            self.force_overwrite,
        )
    }
}

/// Catalog location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Local catalog file (YAML or JSON), relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Base URL of a catalog service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in seconds (HTTP catalogs only)
    #[serde(
        default = "default_timeout",
        skip_serializing_if = "is_default_timeout"
    )]
    pub timeout: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: None,
            url: None,
            timeout: default_timeout(),
        }
    }
}

/// A resolved catalog location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Catalog file on disk.
    File(PathBuf),
    /// Catalog service base URL.
    Url(String),
}

impl CatalogConfig {
    /// Resolve the configured location.
    ///
    /// Relative file paths are resolved against `project_root`. When both a
    /// file and a URL are set the file wins; the validator reports that case.
    pub fn source(&self, project_root: &Path) -> Option<CatalogSource> {
        if let Some(file) = &self.file {
            let path = if file.is_absolute() {
                file.clone()
            } else {
                project_root.join(file)
            };
            return Some(CatalogSource::File(path));
        }

        self.url.clone().map(CatalogSource::Url)
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output mode: verbose, normal, quiet, silent
    pub output: OutputMode,
}

fn default_timeout() -> u64 {
    30
}

fn is_default_timeout(v: &u64) -> bool {
    *v == default_timeout()
}

fn is_false(v: &bool) -> bool {
    !v
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
