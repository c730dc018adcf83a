//! Check command implementation.
//!
//! The `imagegate check` command runs the pre-flight pipeline: it loads the
//! configuration, applies command-line overrides, opens the catalog, and
//! halts with a non-zero exit code when the destination name is taken.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{Catalog, HttpCatalog, InMemoryCatalog};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, validate, CatalogSource, ImagegateConfig};
use crate::error::{ImagegateError, Result};
use crate::pipeline::{PipelineRunner, StepContext};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Load the config file and layer command-line flags on top.
    pub fn resolve_config(&self) -> Result<ImagegateConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;

        if let Some(name) = &self.args.name {
            config.destination_name = name.clone();
        }
        if !self.args.owners.is_empty() {
            config.owners = self.args.owners.clone();
        }
        if self.args.force {
            config.force_overwrite = true;
        }
        // A catalog flag replaces whatever location the file named.
        if let Some(file) = &self.args.catalog_file {
            config.catalog.file = Some(file.clone());
            config.catalog.url = None;
        }
        if let Some(url) = &self.args.catalog_url {
            config.catalog.url = Some(url.clone());
            config.catalog.file = None;
        }

        Ok(config)
    }

    fn open_catalog(&self, config: &ImagegateConfig) -> Result<Box<dyn Catalog>> {
        // Forced runs must not depend on the catalog location.
        if config.force_overwrite {
            return Ok(Box::new(InMemoryCatalog::default()));
        }

        match config.catalog.source(&self.project_root) {
            Some(CatalogSource::File(path)) => {
                tracing::debug!("Using catalog file {}", path.display());
                Ok(Box::new(InMemoryCatalog::from_file(&path)?))
            }
            Some(CatalogSource::Url(url)) => {
                tracing::debug!("Using catalog service {}", url);
                let timeout = Duration::from_secs(config.catalog.timeout);
                Ok(Box::new(HttpCatalog::with_timeout(&url, timeout)?))
            }
            // Rejected by validation unless forced.
            None => Ok(Box::new(InMemoryCatalog::default())),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.resolve_config() {
            Ok(c) => c,
            Err(ImagegateError::ConfigNotFound { path }) => {
                ui.error(&format!("Config file not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // Apply config output mode when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.output.into());
        }

        if let Err(e) = validate(&config) {
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(2));
        }

        ui.show_header(&format!("Pre-flight checks for {}", config.destination_name));

        let catalog = match self.open_catalog(&config) {
            Ok(c) => c,
            Err(e @ ImagegateError::CatalogLoad { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let runner = PipelineRunner::new().with_step(config.prevalidate_step());

        let result = {
            let mut ctx = StepContext::new(&mut *ui, catalog.as_ref());
            runner.run(&mut ctx)
        };

        if ui.output_mode().shows_details() {
            for report in &result.steps {
                ui.message(&format!(
                    "{}: {} ({}ms)",
                    report.name,
                    report.action,
                    report.duration.as_millis()
                ));
            }
        }

        if result.success() {
            if config.force_overwrite {
                ui.warning(&format!(
                    "An existing image named '{}' may be overwritten",
                    config.destination_name
                ));
            } else {
                ui.success(&format!("Image name '{}' is available", config.destination_name));
            }
            Ok(CommandResult::success())
        } else {
            if let Some(step) = result.halted_at() {
                tracing::info!("Pipeline halted at step '{}'", step);
            }
            Ok(CommandResult::failure(1))
        }
    }
}
