//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// imagegate - Pre-flight name validation for image builds.
#[derive(Debug, Parser)]
#[command(name = "imagegate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default imagegate.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the destination image name is free
    Check(CheckArgs),

    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `check` command.
///
/// Every flag overrides the matching config file value.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Destination image name
    #[arg(short, long, env = "IMAGEGATE_NAME")]
    pub name: Option<String>,

    /// Restrict the lookup to this owner (repeatable, replaces config owners)
    #[arg(short, long = "owner")]
    pub owners: Vec<String>,

    /// Skip the check and allow overwriting an existing image
    #[arg(short, long)]
    pub force: bool,

    /// Local catalog file (YAML or JSON)
    #[arg(long, conflicts_with = "catalog_url")]
    pub catalog_file: Option<PathBuf>,

    /// Catalog service base URL
    #[arg(long)]
    pub catalog_url: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::try_parse_from([
            "imagegate",
            "check",
            "--name",
            "my-image-v3",
            "--owner",
            "111",
            "--owner",
            "222",
            "--catalog-url",
            "http://localhost:9000",
        ])
        .unwrap();

        let Commands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.name.as_deref(), Some("my-image-v3"));
        assert_eq!(args.owners, vec!["111", "222"]);
        assert_eq!(args.catalog_url.as_deref(), Some("http://localhost:9000"));
        assert!(!args.force);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["imagegate", "check", "--force", "--quiet", "--debug"])
            .unwrap();
        assert!(cli.quiet);
        assert!(cli.debug);
        let Commands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert!(args.force);
    }

    #[test]
    fn catalog_file_and_url_conflict() {
        let result = Cli::try_parse_from([
            "imagegate",
            "check",
            "--catalog-file",
            "catalog.yml",
            "--catalog-url",
            "http://localhost",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_config_json() {
        let cli = Cli::try_parse_from(["imagegate", "config", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigArgs { json: true })));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["imagegate"]).is_err());
    }
}
