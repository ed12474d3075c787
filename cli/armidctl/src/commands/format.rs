//! Format command (build an ID from components).

use anyhow::{Context, Result};
use armid::ResourceKind;
use clap::Args;

use crate::error::CliError;

use super::parse::IdView;
use super::CommandContext;

/// Build an ID from its components.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Resource kind, e.g. `DedicatedHost`.
    kind: ResourceKind,

    /// Subscription ID (defaults to the configured subscription).
    #[arg(long)]
    subscription: Option<String>,

    /// Resource group name.
    #[arg(long, short = 'g')]
    resource_group: String,

    /// Nested resource names, outermost first (see `armid kinds`).
    values: Vec<String>,
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let subscription = self
            .subscription
            .as_deref()
            .or(ctx.config.subscription_id.as_deref())
            .ok_or(CliError::MissingSubscription)?;

        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        let id = self
            .kind
            .build(subscription, &self.resource_group, &values)
            .with_context(|| format!("Expected values for {}", self.kind.template()))?;

        IdView::new(&id).print(ctx.format);
        Ok(())
    }
}
