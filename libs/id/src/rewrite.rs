//! Repairing miscased IDs returned by the management API.
//!
//! Some API responses spell literal segment names with inconsistent casing
//! (`resourcegroups`, `Microsoft.compute/Disks`, ...). Before such an ID is
//! persisted it is parsed leniently and re-serialized through the ordinary
//! formatter, so everything downstream only sees canonical casing.

use tracing::debug;

use crate::{ParseError, ResourceId, ResourceKind};

/// Parses `input` as `T` ignoring the casing of literal segment names and
/// returns the canonical form.
pub fn normalize<T: ResourceId>(input: &str) -> Result<String, ParseError> {
    let canonical = T::parse_insensitively(input)?.id();
    log_repair(T::KIND, input, &canonical);
    Ok(canonical)
}

/// Like [`normalize`], for a kind only known at runtime.
pub fn normalize_kind(kind: ResourceKind, input: &str) -> Result<String, ParseError> {
    let canonical = kind.parse_insensitively(input)?.id();
    log_repair(kind.display_name(), input, &canonical);
    Ok(canonical)
}

fn log_repair(kind: &str, input: &str, canonical: &str) {
    if input != canonical {
        debug!(kind, input, canonical, "Normalized resource ID casing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManagedDiskId, SharedImageVersionId};

    #[test]
    fn test_normalize_restores_casing() {
        let input = "/subscriptions/s1/resourcegroups/rg1/providers/microsoft.compute/Disks/Disk1";
        assert_eq!(
            normalize::<ManagedDiskId>(input).unwrap(),
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/disks/Disk1"
        );
    }

    #[test]
    fn test_normalize_preserves_value_casing() {
        let input = "/subscriptions/S1/resourceGroups/MyRG/providers/Microsoft.Compute/galleries/G/IMAGES/Img/versions/1.0.0";
        assert_eq!(
            normalize::<SharedImageVersionId>(input).unwrap(),
            "/subscriptions/S1/resourceGroups/MyRG/providers/Microsoft.Compute/galleries/G/images/Img/versions/1.0.0"
        );
    }

    #[test]
    fn test_normalize_canonical_is_identity() {
        let input = "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/disks/disk1";
        assert_eq!(normalize::<ManagedDiskId>(input).unwrap(), input);
        assert_eq!(normalize_kind(ResourceKind::ManagedDisk, input).unwrap(), input);
    }

    #[test]
    fn test_normalize_still_rejects_structural_errors() {
        let input = "/subscriptions/s1/resourcegroups/rg1/providers/Microsoft.Compute/disks/disk1/extra/x";
        assert!(normalize::<ManagedDiskId>(input).is_err());
        assert!(normalize_kind(ResourceKind::VirtualMachine, input).is_err());
    }
}
