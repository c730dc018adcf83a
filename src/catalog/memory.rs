//! In-memory catalog, optionally loaded from a file.
//!
//! Catalog files list images under an `images` key:
//!
//! ```yaml
//! images:
//!   - id: ami-abc123
//!     name: my-image-v3
//!     owner: "111"
//! ```
//!
//! Files ending in `.json` are parsed as JSON, everything else as YAML.

use crate::catalog::{Catalog, ImageQuery, ImageRecord};
use crate::error::{ImagegateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk catalog layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    images: Option<Vec<ImageRecord>>,
}

/// Catalog backed by a list of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    images: Vec<ImageRecord>,
}

impl InMemoryCatalog {
    /// Create a catalog from records.
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self { images }
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoad` if the file is missing or malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let load_err = |message: String| ImagegateError::CatalogLoad {
            path: path.to_path_buf(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: CatalogFile = if content.trim().is_empty() {
            CatalogFile::default()
        } else if is_json {
            serde_json::from_str(&content).map_err(|e| load_err(e.to_string()))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| load_err(e.to_string()))?
        };

        // `images: null` reads the same as a missing key.
        let images = file.images.unwrap_or_default();
        tracing::debug!(
            "Loaded {} image(s) from catalog file {}",
            images.len(),
            path.display()
        );

        Ok(Self::new(images))
    }

    /// Add a record to the catalog.
    pub fn insert(&mut self, record: ImageRecord) {
        self.images.push(record);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn query(&self, query: &ImageQuery) -> anyhow::Result<Vec<ImageRecord>> {
        Ok(self
            .images
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }
}
