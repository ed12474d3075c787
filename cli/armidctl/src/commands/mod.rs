//! CLI commands.

mod format;
mod kinds;
mod normalize;
mod parse;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// armid - Parse, validate and repair Azure Resource Manager IDs.
#[derive(Debug, Parser)]
#[command(name = "armid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "ARMID_FORMAT")]
    format: Option<String>,

    /// Path to a config file (defaults to the platform config directory).
    #[arg(long, global = true, env = "ARMID_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an ID and show its components.
    Parse(parse::ParseCommand),

    /// Build an ID from its components.
    Format(format::FormatCommand),

    /// Repair the casing of IDs returned by the management API.
    Normalize(normalize::NormalizeCommand),

    /// Strictly validate IDs.
    Validate(validate::ValidateCommand),

    /// List supported resource kinds.
    Kinds,

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Whether logs should be emitted as JSON.
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        let format = self
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from_name)
            .unwrap_or_default();

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Normalize(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Kinds => kinds::run(&ctx),
            Commands::Version => {
                println!("armid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "armid",
            "--format",
            "json",
            "parse",
            "ManagedDisk",
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/disks/d1",
        ])
        .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_unknown_kind_rejected_by_parser() {
        let result = Cli::try_parse_from(["armid", "parse", "Teapot", "/subscriptions/s1"]);
        assert!(result.is_err());
    }

    fn context(subscription_id: Option<&str>) -> CommandContext {
        CommandContext {
            config: Config {
                format: None,
                subscription_id: subscription_id.map(str::to_string),
            },
            format: OutputFormat::Json,
        }
    }

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["armid"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    fn run(cmd: Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Normalize(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Kinds => kinds::run(ctx),
            Commands::Version => Ok(()),
        }
    }

    #[test]
    fn test_format_uses_configured_subscription() {
        let cmd = command(&["format", "DedicatedHost", "-g", "rg1", "group1", "host1"]);
        assert!(run(cmd, &context(Some("s1"))).is_ok());
    }

    #[test]
    fn test_format_without_subscription() {
        let cmd = command(&["format", "DedicatedHost", "-g", "rg1", "group1", "host1"]);
        let err = run(cmd, &context(None)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::error::CliError>(),
            Some(crate::error::CliError::MissingSubscription)
        ));
    }

    #[test]
    fn test_format_wrong_value_count() {
        let cmd = command(&["format", "DedicatedHost", "--subscription", "s1", "-g", "rg1", "host1"]);
        let err = run(cmd, &context(None)).unwrap_err();
        assert!(err.downcast_ref::<armid::ParseError>().is_some());
    }

    #[test]
    fn test_validate_reports_failures() {
        let cmd = command(&[
            "validate",
            "AvailabilitySet",
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/availabilitySets/set1",
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/availabilitysets/set1",
        ]);
        let err = run(cmd, &context(None)).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 IDs failed validation");
    }

    #[test]
    fn test_normalize_and_kinds() {
        let cmd = command(&[
            "normalize",
            "ManagedDisk",
            "/SUBSCRIPTIONS/s1/resourcegroups/rg1/providers/Microsoft.Compute/DISKS/d1",
        ]);
        assert!(run(cmd, &context(None)).is_ok());
        assert!(run(command(&["kinds"]), &context(None)).is_ok());
    }
}
