//! Kinds command.

use anyhow::Result;
use armid::ResourceKind;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "KIND")]
    name: &'static str,
    #[tabled(rename = "DESCRIPTION")]
    display_name: &'static str,
    #[tabled(rename = "TEMPLATE")]
    template: String,
}

impl From<ResourceKind> for KindRow {
    fn from(kind: ResourceKind) -> Self {
        Self {
            name: kind.name(),
            display_name: kind.display_name(),
            template: kind.template(),
        }
    }
}

pub fn run(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<KindRow> = ResourceKind::ALL.iter().copied().map(KindRow::from).collect();
    print_output(&rows, ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_row() {
        let row = KindRow::from(ResourceKind::IotHub);
        assert_eq!(row.name, "IotHub");
        assert_eq!(row.display_name, "IoT Hub");
        assert!(row.template.ends_with("/providers/Microsoft.Devices/IotHubs/{name}"));
    }
}
