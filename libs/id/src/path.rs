//! Tokenizing raw resource ID strings into prefix values and segment pairs.

use crate::IdError;

/// Literal key of the subscription prefix element.
pub const SUBSCRIPTIONS: &str = "subscriptions";

/// Literal key of the resource group prefix element.
pub const RESOURCE_GROUPS: &str = "resourceGroups";

/// Literal key of the provider namespace segment.
pub const PROVIDERS: &str = "providers";

/// How literal segment keys are compared against expected names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Keys must match byte for byte. Used for all validation-facing parsing.
    Exact,
    /// Keys match ignoring ASCII case. Used only to repair IDs handed back
    /// by the management API with inconsistent casing.
    Insensitive,
}

impl Casing {
    /// Compares a key found in the input against an expected literal.
    pub fn matches(self, actual: &str, expected: &str) -> bool {
        match self {
            Casing::Exact => actual == expected,
            Casing::Insensitive => actual.eq_ignore_ascii_case(expected),
        }
    }
}

/// One `key/value` pair following the subscription and resource group prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    key: String,
    value: String,
}

impl Segment {
    /// The segment key with its original casing.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The segment value. May be empty; the validator rejects that once the
    /// segment is consumed.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A tokenized resource ID.
///
/// The subscription and resource group are captured from the fixed prefix;
/// everything after it (including `providers/{namespace}`) is kept as ordered
/// pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    subscription_id: String,
    resource_group: String,
    segments: Vec<Segment>,
}

impl ResourcePath {
    /// Splits `input` into prefix values and segment pairs.
    ///
    /// `casing` only governs how the `subscriptions` and `resourceGroups`
    /// prefix keys are recognised. A prefix element cut off by the end of the
    /// input is captured as an empty value so the validator can name it.
    pub fn tokenize(input: &str, casing: Casing) -> Result<Self, IdError> {
        let mut components: Vec<&str> = input
            .split('/')
            .skip_while(|component| component.is_empty())
            .collect();

        // `/a/b/` and `/a/b` are the same path, but `/a/` is `a` with an empty value.
        if components.len() % 2 == 1 && components.last() == Some(&"") {
            components.pop();
        }

        if components.is_empty() {
            return Err(IdError::malformed("ID cannot be empty"));
        }

        let mut components = components.into_iter();

        let subscription_id = match components.next() {
            Some(key) if casing.matches(key, SUBSCRIPTIONS) => {
                components.next().unwrap_or_default().to_string()
            }
            Some(key) => {
                return Err(IdError::malformed(format!(
                    "expected the ID to start with `{SUBSCRIPTIONS}`, got `{key}`"
                )))
            }
            None => String::new(),
        };

        let resource_group = match components.next() {
            Some(key) if casing.matches(key, RESOURCE_GROUPS) => {
                components.next().unwrap_or_default().to_string()
            }
            Some(key) => {
                return Err(IdError::malformed(format!(
                    "expected `{RESOURCE_GROUPS}` after the subscription, got `{key}`"
                )))
            }
            None => String::new(),
        };

        let rest: Vec<&str> = components.collect();
        if rest.len() % 2 != 0 {
            return Err(IdError::malformed(format!(
                "the number of path segments is not divisible by 2 (dangling `{}`)",
                rest.last().copied().unwrap_or_default()
            )));
        }

        let mut segments = Vec::with_capacity(rest.len() / 2);
        for pair in rest.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() {
                return Err(IdError::malformed(format!(
                    "segment key cannot be empty (value `{value}`)"
                )));
            }
            segments.push(Segment {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        Ok(Self {
            subscription_id,
            resource_group,
            segments,
        })
    }

    /// The captured subscription value (empty if absent).
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// The captured resource group value (empty if absent).
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Segment pairs after the prefix, in input order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn into_prefix(self) -> (String, String) {
        (self.subscription_id, self.resource_group)
    }
}
