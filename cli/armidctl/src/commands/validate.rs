//! Validate command.

use anyhow::Result;
use armid::ResourceKind;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_failure, print_output, print_success, OutputFormat};

use super::CommandContext;

/// Strictly validate IDs.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Resource kind, e.g. `VirtualMachineExtension`.
    kind: ResourceKind,

    /// IDs to validate.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Attribute name used in error messages.
    #[arg(long, default_value = "id")]
    key: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "VALID")]
    valid: bool,
    #[tabled(rename = "ERROR")]
    error: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows: Vec<ValidationRow> = self
            .ids
            .iter()
            .map(|id| {
                let result = armid::validation::resource_id_of_kind(self.kind, &self.key, id);
                if let Err(err) = &result {
                    tracing::info!(kind = %self.kind, id = %id, error = %err, "ID failed validation");
                }
                ValidationRow {
                    id: id.clone(),
                    valid: result.is_ok(),
                    error: result.err().map(|err| err.to_string()).unwrap_or_default(),
                }
            })
            .collect();

        match ctx.format {
            OutputFormat::Json => print_output(&rows, ctx.format),
            OutputFormat::Table => {
                for row in &rows {
                    if row.valid {
                        print_success(&row.id);
                    } else {
                        print_failure(&row.error);
                    }
                }
            }
        }

        let failed = rows.iter().filter(|row| !row.valid).count();
        if failed > 0 {
            return Err(CliError::ValidationFailed {
                failed,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}
