//! Config command implementation.
//!
//! The `imagegate config` command shows the loaded configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{find_config, load_config};
use crate::error::{ImagegateError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(ImagegateError::ConfigNotFound { path }) => {
                ui.error(&format!("Config file not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let source = self
            .config_path
            .clone()
            .or_else(|| find_config(&self.project_root));
        match source {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => ui.message("# (defaults, no config file found)"),
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| ImagegateError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| ImagegateError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
