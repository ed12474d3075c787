//! Structural checks run around a kind's segment sequence.

use crate::path::{ResourcePath, RESOURCE_GROUPS, SUBSCRIPTIONS};
use crate::IdError;

/// Checks that the subscription and resource group prefix carried values.
pub fn validate_prefix(path: &ResourcePath) -> Result<(), IdError> {
    if path.subscription_id().is_empty() {
        return Err(IdError::MissingRequiredElement(SUBSCRIPTIONS));
    }
    if path.resource_group().is_empty() {
        return Err(IdError::MissingRequiredElement(RESOURCE_GROUPS));
    }
    Ok(())
}

/// Checks a path once every expected segment has been popped.
///
/// `consumed` runs parallel to `path.segments()`. Must only be called after
/// the full sequence has run, since pending segments count as leftovers.
pub fn validate_complete(path: &ResourcePath, consumed: &[bool]) -> Result<(), IdError> {
    validate_prefix(path)?;

    let segments = path.segments().iter().zip(consumed);

    if let Some((segment, _)) = segments
        .clone()
        .find(|(segment, consumed)| **consumed && segment.value().is_empty())
    {
        return Err(IdError::EmptySegment(segment.key().to_string()));
    }

    let leftover: Vec<String> = segments
        .filter(|(_, consumed)| !**consumed)
        .map(|(segment, _)| segment.key().to_string())
        .collect();
    if !leftover.is_empty() {
        return Err(IdError::UnexpectedTrailingSegments { segments: leftover });
    }

    Ok(())
}
