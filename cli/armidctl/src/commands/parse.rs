//! Parse command.

use anyhow::{Context, Result};
use armid::{AnyResourceId, ResourceKind};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Parse an ID and show its components.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Resource kind, e.g. `AvailabilitySet` or `shared-image-version`.
    kind: ResourceKind,

    /// The ID to parse.
    id: String,

    /// Ignore the casing of literal segment names (repair mode).
    #[arg(long)]
    insensitive: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct IdView {
    pub kind: &'static str,
    pub id: String,
    pub description: String,
    pub subscription_id: String,
    pub resource_group: String,
    pub segments: Vec<SegmentRow>,
}

#[derive(Debug, Serialize, Tabled)]
pub(super) struct SegmentRow {
    #[tabled(rename = "FIELD")]
    pub field: &'static str,
    #[tabled(rename = "SEGMENT")]
    pub segment: String,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl IdView {
    pub(super) fn new(id: &AnyResourceId) -> Self {
        let kind = id.kind();
        let mut segments = vec![
            SegmentRow {
                field: "subscription_id",
                segment: armid::SUBSCRIPTIONS.to_string(),
                value: id.subscription_id().to_string(),
            },
            SegmentRow {
                field: "resource_group",
                segment: armid::RESOURCE_GROUPS.to_string(),
                value: id.resource_group().to_string(),
            },
        ];
        if let Some(provider) = kind.provider() {
            segments.push(SegmentRow {
                field: "provider",
                segment: armid::PROVIDERS.to_string(),
                value: provider.to_string(),
            });
        }
        segments.extend(
            kind.fields()
                .iter()
                .copied()
                .zip(kind.segments())
                .zip(id.segment_values())
                .map(|((field, segment), value)| SegmentRow {
                    field,
                    segment: segment.to_string(),
                    value: value.to_string(),
                }),
        );

        Self {
            kind: kind.name(),
            id: id.id(),
            description: id.describe(),
            subscription_id: id.subscription_id().to_string(),
            resource_group: id.resource_group().to_string(),
            segments,
        }
    }

    pub(super) fn print(&self, format: OutputFormat) {
        match format {
            OutputFormat::Json => print_single(self),
            OutputFormat::Table => {
                println!("{}", self.description);
                println!("id: {}", self.id);
                print_output(&self.segments, format);
            }
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = if self.insensitive {
            self.kind.parse_insensitively(&self.id)
        } else {
            self.kind.parse(&self.id)
        }
        .with_context(|| format!("Invalid {} ID", self.kind.display_name()))?;

        tracing::debug!(kind = %self.kind, insensitive = self.insensitive, "Parsed ID");
        IdView::new(&id).print(ctx.format);
        Ok(())
    }
}
