//! Configuration-time validation of user-supplied resource IDs.
//!
//! Wraps strict parsing so a bad attribute value is reported against the
//! attribute it came from.

use thiserror::Error;

use crate::{IdError, ResourceId, ResourceKind};

/// A user-supplied value that is not a valid ID of the expected kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{key} must not be empty")]
    Empty { key: String },

    #[error("expected {key} to be a valid {kind} ID, got {value:?}: {reason}")]
    Invalid {
        key: String,
        kind: &'static str,
        value: String,
        #[source]
        reason: IdError,
    },
}

impl ValidationError {
    /// The attribute key the value was supplied for.
    pub fn key(&self) -> &str {
        match self {
            ValidationError::Empty { key } | ValidationError::Invalid { key, .. } => key,
        }
    }
}

/// Validates `value`, supplied for attribute `key`, as a strict `T` ID.
pub fn resource_id<T: ResourceId>(key: &str, value: &str) -> Result<(), ValidationError> {
    check(key, value, T::KIND, |value| T::parse(value).map(drop))
}

/// Like [`resource_id`], for a kind only known at runtime.
pub fn resource_id_of_kind(kind: ResourceKind, key: &str, value: &str) -> Result<(), ValidationError> {
    check(key, value, kind.display_name(), |value| kind.parse(value).map(drop))
}

fn check(
    key: &str,
    value: &str,
    kind: &'static str,
    parse: impl FnOnce(&str) -> Result<(), crate::ParseError>,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty {
            key: key.to_string(),
        });
    }

    parse(value).map_err(|err| ValidationError::Invalid {
        key: key.to_string(),
        kind,
        value: value.to_string(),
        reason: err.into_reason(),
    })
}
