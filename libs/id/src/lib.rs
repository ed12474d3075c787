//! # armid
//!
//! Typed Azure Resource Manager IDs: strict parsing, casing repair, and
//! canonical formatting.
//!
//! ## Design Principles
//!
//! - Every resource kind has its own type; IDs of different kinds never mix
//! - Parsing is all-or-nothing: a typed ID is only ever fully populated
//! - IDs roundtrip exactly (parse → format → identical canonical string)
//! - Strict parsing matches literal segment names exactly; lenient parsing
//!   exists only to repair miscased IDs from the management API
//!
//! ## ID Format
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{Namespace}/{type1}/{name1}[/{type2}/{name2}]...
//! ```
//!
//! Examples:
//! - `/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Compute/availabilitySets/set1`
//! - `/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Compute/galleries/gallery1/images/image1/versions/1.0.0`
//!
//! ## Pipeline
//!
//! A raw string is split by [`ResourcePath::tokenize`], a kind's parse
//! function drives a [`SegmentConsumer`] through the kind's expected segment
//! names, and structural checks reject anything left over or out of order.
//! Formatting is the reverse and cannot fail.

mod consumer;
mod error;
mod format;
mod kinds;
mod macros;
mod path;
mod registry;
mod resource_id;
mod validate;

pub mod rewrite;
pub mod validation;

pub use consumer::SegmentConsumer;
pub use error::{IdError, ParseError};
pub use kinds::*;
pub use path::{Casing, ResourcePath, Segment, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};
pub use registry::{AnyResourceId, ResourceKind, UnknownKindError};
pub use resource_id::{ChildResourceId, ResourceId};

// Used by `define_resource_id!` expansions in downstream crates.
#[doc(hidden)]
pub use serde;

/// Parses `input` as `kind`, matching literal segment names exactly.
pub fn parse(kind: ResourceKind, input: &str) -> Result<AnyResourceId, ParseError> {
    kind.parse(input)
}

/// Parses `input` as `kind`, ignoring the casing of literal segment names.
pub fn parse_insensitively(kind: ResourceKind, input: &str) -> Result<AnyResourceId, ParseError> {
    kind.parse_insensitively(input)
}

/// Formats any typed ID in canonical form.
pub fn format(id: &AnyResourceId) -> String {
    id.id()
}
