//! Normalize command (repair casing).

use anyhow::Result;
use armid::ResourceKind;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, OutputFormat};

use super::CommandContext;

/// Repair the casing of IDs returned by the management API.
#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Resource kind, e.g. `ManagedDisk`.
    kind: ResourceKind,

    /// IDs to normalize.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct NormalizedRow {
    #[tabled(rename = "INPUT")]
    input: String,
    #[tabled(rename = "CANONICAL")]
    canonical: String,
    #[tabled(rename = "CHANGED")]
    changed: bool,
}

impl NormalizeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = self
            .ids
            .iter()
            .map(|input| {
                let canonical = armid::rewrite::normalize_kind(self.kind, input)?;
                Ok(NormalizedRow {
                    changed: canonical != *input,
                    input: input.clone(),
                    canonical,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        match ctx.format {
            OutputFormat::Json => print_output(&rows, ctx.format),
            // Plain lines so the output can be piped straight back in.
            OutputFormat::Table => rows.iter().for_each(|row| println!("{}", row.canonical)),
        }
        Ok(())
    }
}
