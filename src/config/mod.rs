//! Configuration loading, parsing, and validation for imagegate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use imagegate::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("imagegate.yml"),
//!     "destination_name: my-image-v3\ncatalog:\n  file: catalog.yml\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.destination_name, "my-image-v3");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::{CatalogConfig, CatalogSource, ImagegateConfig, OutputMode, Settings};
pub use validator::{validate, validate_config, ValidationError};
