//! Traits shared by every typed resource ID.

use crate::ParseError;

/// A typed ID for one resource kind.
///
/// Implemented by [`define_resource_id!`](crate::define_resource_id) for every
/// provider-scoped kind, and by hand for [`ResourceGroupId`](crate::ResourceGroupId).
pub trait ResourceId: Sized {
    /// Human-readable kind name, e.g. `"Availability Set"`.
    const KIND: &'static str;

    /// Provider namespace, or `None` for kinds with no `providers` segment.
    const PROVIDER: Option<&'static str>;

    /// Literal segment names, outermost first.
    const SEGMENTS: &'static [&'static str];

    /// Field names parallel to [`Self::SEGMENTS`].
    const FIELDS: &'static [&'static str];

    /// Parses a canonical ID, matching literal segment names exactly.
    fn parse(input: &str) -> Result<Self, ParseError>;

    /// Parses an ID whose literal segment names may be miscased.
    fn parse_insensitively(input: &str) -> Result<Self, ParseError>;

    fn subscription_id(&self) -> &str;

    fn resource_group(&self) -> &str;

    /// Values of the nested segments, parallel to [`Self::SEGMENTS`].
    fn segment_values(&self) -> Vec<&str>;

    /// Renders the canonical ID string.
    fn id(&self) -> String {
        crate::format::render(
            self.subscription_id(),
            self.resource_group(),
            Self::PROVIDER,
            Self::SEGMENTS,
            &self.segment_values(),
        )
    }

    /// Describes the ID for user-facing messages.
    fn describe(&self) -> String {
        crate::format::describe(
            Self::KIND,
            self.resource_group(),
            Self::FIELDS,
            &self.segment_values(),
        )
    }
}

/// A resource ID nested directly under another kind.
pub trait ChildResourceId: ResourceId {
    type Parent: ResourceId;

    /// Builds the child's ID from its parent's and the child's own name.
    fn from_parent(parent: &Self::Parent, name: impl Into<String>) -> Self;

    /// The ID of the resource this one is nested under.
    fn parent(&self) -> Self::Parent;
}
