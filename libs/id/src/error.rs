//! Error types for resource ID parsing and validation.

use thiserror::Error;

/// Structural reasons a resource ID can be rejected.
///
/// These carry no knowledge of which resource kind was being parsed; the
/// parse functions wrap them in a [`ParseError`] that does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The path is structurally broken: empty, wrong prefix keys, or
    /// components that do not pair up.
    #[error("malformed ID: {message}")]
    MalformedIdentifier { message: String },

    /// An expected named segment was not found among the remaining segments.
    #[error("ID was missing the `{0}` element")]
    MissingSegment(String),

    /// A segment was present but its value is empty.
    #[error("ID contained an empty value for the `{0}` element")]
    EmptySegment(String),

    /// Segments were left over once the expected sequence was consumed.
    #[error("ID contained more segments than required: {}", .segments.join(", "))]
    UnexpectedTrailingSegments { segments: Vec<String> },

    /// The subscription or resource group prefix has no value.
    #[error("ID was missing the `{0}` element")]
    MissingRequiredElement(&'static str),

    /// The `providers` segment names a different namespace.
    #[error("expected provider namespace `{expected}`, got `{actual}`")]
    UnexpectedProvider {
        expected: &'static str,
        actual: String,
    },
}

impl IdError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        IdError::MalformedIdentifier {
            message: message.into(),
        }
    }

    /// Returns true if a named segment was missing.
    pub fn is_missing_segment(&self) -> bool {
        matches!(self, IdError::MissingSegment(_))
    }

    /// Returns true if the subscription or resource group prefix was missing.
    pub fn is_missing_required_element(&self) -> bool {
        matches!(self, IdError::MissingRequiredElement(_))
    }

    /// Returns true if the path could not be tokenized at all.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IdError::MalformedIdentifier { .. })
    }
}

/// A failure to parse a raw string as a particular resource kind.
///
/// Always carries the offending input so callers can surface it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parsing {input:?} as a {kind} ID: {reason}")]
pub struct ParseError {
    kind: &'static str,
    input: String,
    #[source]
    reason: IdError,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, input: &str, reason: IdError) -> Self {
        Self {
            kind,
            input: input.to_string(),
            reason,
        }
    }

    /// Human-readable name of the resource kind being parsed.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The structural reason for the failure.
    pub fn reason(&self) -> &IdError {
        &self.reason
    }

    /// Consumes the error, returning the structural reason.
    pub fn into_reason(self) -> IdError {
        self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_includes_input_and_kind() {
        let err = ParseError::new(
            "Availability Set",
            "/subscriptions/s1",
            IdError::MissingRequiredElement("resourceGroups"),
        );
        let msg = err.to_string();
        assert!(msg.contains("\"/subscriptions/s1\""));
        assert!(msg.contains("Availability Set"));
        assert!(msg.contains("`resourceGroups`"));
    }

    #[test]
    fn test_trailing_segments_message_lists_keys() {
        let err = IdError::UnexpectedTrailingSegments {
            segments: vec!["extensions".to_string(), "foo".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "ID contained more segments than required: extensions, foo"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(IdError::MissingSegment("hosts".into()).is_missing_segment());
        assert!(IdError::MissingRequiredElement("subscriptions").is_missing_required_element());
        assert!(IdError::malformed("bad").is_malformed());
        assert!(!IdError::EmptySegment("disks".into()).is_missing_segment());
    }
}
