//! Consuming expected segments out of a tokenized path.

use crate::path::{Casing, ResourcePath, PROVIDERS};
use crate::validate::{validate_complete, validate_prefix};
use crate::{IdError, ParseError};

/// A cursor over one tokenized path, owned by a single parse call.
///
/// Segments are looked up by name regardless of position. Each successful
/// pop marks its entry consumed so it can be neither popped again nor
/// reported as a leftover. Strict parsing additionally requires, in
/// [`finish`](Self::finish), that segments were found in the order they were
/// asked for.
#[derive(Debug)]
pub struct SegmentConsumer<'a> {
    kind: &'static str,
    input: &'a str,
    casing: Casing,
    path: ResourcePath,
    consumed: Vec<bool>,
    order: Vec<usize>,
}

impl<'a> SegmentConsumer<'a> {
    /// Wraps an already tokenized path.
    pub fn new(kind: &'static str, input: &'a str, casing: Casing, path: ResourcePath) -> Self {
        let consumed = vec![false; path.segments().len()];
        Self {
            kind,
            input,
            casing,
            path,
            consumed,
            order: Vec::new(),
        }
    }

    /// Tokenizes `input` and prepares it for a kind's segment sequence.
    ///
    /// Rejects a missing subscription or resource group up front, then, for
    /// provider-scoped kinds, consumes `providers` and checks its namespace.
    pub fn begin(
        input: &'a str,
        kind: &'static str,
        provider: Option<&'static str>,
        casing: Casing,
    ) -> Result<Self, ParseError> {
        let path = ResourcePath::tokenize(input, casing)
            .and_then(|path| validate_prefix(&path).map(|()| path))
            .map_err(|reason| ParseError::new(kind, input, reason))?;

        let mut consumer = Self::new(kind, input, casing, path);
        if let Some(expected) = provider {
            let actual = consumer.take(PROVIDERS)?;
            if actual.is_empty() {
                return Err(consumer.error(IdError::EmptySegment(PROVIDERS.to_string())));
            }
            if !casing.matches(&actual, expected) {
                return Err(consumer.error(IdError::UnexpectedProvider { expected, actual }));
            }
        }
        Ok(consumer)
    }

    /// Pops the first unconsumed segment whose key equals `name` exactly.
    pub fn pop(&mut self, name: &str) -> Result<String, IdError> {
        self.pop_where(name, |key| key == name)
    }

    /// Pops the first unconsumed segment whose key equals `name` ignoring
    /// ASCII case.
    ///
    /// Only the repair path may use this; strict parsing must never accept
    /// a miscased key.
    pub fn pop_insensitive(&mut self, name: &str) -> Result<String, IdError> {
        self.pop_where(name, |key| key.eq_ignore_ascii_case(name))
    }

    /// Pops `name` using this consumer's casing discipline, annotating any
    /// failure with the resource kind and raw input.
    pub fn take(&mut self, name: &str) -> Result<String, ParseError> {
        let popped = match self.casing {
            Casing::Exact => self.pop(name),
            Casing::Insensitive => self.pop_insensitive(name),
        };
        popped.map_err(|reason| self.error(reason))
    }

    /// Keys of the segments not yet consumed, in input order.
    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.path
            .segments()
            .iter()
            .zip(&self.consumed)
            .filter(|(_, consumed)| !**consumed)
            .map(|(segment, _)| segment.key())
    }

    /// Validates completeness and hands back the subscription and resource
    /// group.
    ///
    /// With [`Casing::Exact`] the segments must also appear in the order they
    /// were popped, so a strictly parsed ID always formats back to its input.
    pub fn finish(self) -> Result<(String, String), ParseError> {
        validate_complete(&self.path, &self.consumed)
            .and_then(|()| match self.casing {
                Casing::Exact => self.validate_order(),
                Casing::Insensitive => Ok(()),
            })
            .map_err(|reason| ParseError::new(self.kind, self.input, reason))?;
        Ok(self.path.into_prefix())
    }

    fn validate_order(&self) -> Result<(), IdError> {
        match self.order.windows(2).find(|pair| pair[0] > pair[1]) {
            Some(pair) => {
                let segments = self.path.segments();
                Err(IdError::malformed(format!(
                    "expected `{}` before `{}`",
                    segments[pair[1]].key(),
                    segments[pair[0]].key()
                )))
            }
            None => Ok(()),
        }
    }

    fn pop_where(&mut self, name: &str, is_match: impl Fn(&str) -> bool) -> Result<String, IdError> {
        let index = self
            .path
            .segments()
            .iter()
            .zip(&self.consumed)
            .position(|(segment, consumed)| !*consumed && is_match(segment.key()))
            .ok_or_else(|| IdError::MissingSegment(name.to_string()))?;

        self.consumed[index] = true;
        self.order.push(index);
        Ok(self.path.segments()[index].value().to_string())
    }

    fn error(&self, reason: IdError) -> ParseError {
        ParseError::new(self.kind, self.input, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/hostGroups/group1/hosts/host1";

    fn consumer(input: &str, casing: Casing) -> SegmentConsumer<'_> {
        let path = ResourcePath::tokenize(input, casing).unwrap();
        SegmentConsumer::new("Dedicated Host", input, casing, path)
    }

    #[test]
    fn test_pop_is_order_independent() {
        let mut consumer = consumer(HOST, Casing::Exact);
        assert_eq!(consumer.pop("hosts").unwrap(), "host1");
        assert_eq!(consumer.pop("hostGroups").unwrap(), "group1");
        assert_eq!(consumer.remaining().collect::<Vec<_>>(), vec!["providers"]);
    }

    #[test]
    fn test_pop_twice_fails() {
        let mut consumer = consumer(HOST, Casing::Exact);
        consumer.pop("hosts").unwrap();
        assert_eq!(
            consumer.pop("hosts"),
            Err(IdError::MissingSegment("hosts".to_string()))
        );
    }

    #[test]
    fn test_pop_is_case_sensitive() {
        let mut consumer = consumer(HOST, Casing::Exact);
        assert!(consumer.pop("HostGroups").unwrap_err().is_missing_segment());
        assert_eq!(consumer.remaining().count(), 3);
    }

    #[test]
    fn test_pop_insensitive_matches_any_casing() {
        let mut consumer = consumer(HOST, Casing::Exact);
        assert_eq!(consumer.pop_insensitive("HOSTGROUPS").unwrap(), "group1");
        assert!(consumer.pop_insensitive("hostgroups").is_err());
    }

    #[test]
    fn test_pop_takes_first_of_duplicate_keys() {
        let input = "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Web/sites/a/sites/b";
        let mut consumer = consumer(input, Casing::Exact);
        assert_eq!(consumer.pop("sites").unwrap(), "a");
        assert_eq!(consumer.pop("sites").unwrap(), "b");
    }

    #[test]
    fn test_take_annotates_errors() {
        let mut consumer = consumer(HOST, Casing::Exact);
        let err = consumer.take("extensions").unwrap_err();
        assert_eq!(err.kind(), "Dedicated Host");
        assert_eq!(err.input(), HOST);
        assert!(err.reason().is_missing_segment());
    }

    #[test]
    fn test_begin_checks_provider() {
        let err = SegmentConsumer::begin(HOST, "Dedicated Host", Some("Microsoft.Network"), Casing::Exact)
            .unwrap_err();
        assert_eq!(
            err.reason(),
            &IdError::UnexpectedProvider {
                expected: "Microsoft.Network",
                actual: "Microsoft.Compute".to_string(),
            }
        );
    }

    #[test]
    fn test_begin_provider_casing_follows_mode() {
        let input = HOST.replace("Microsoft.Compute", "microsoft.compute");
        assert!(SegmentConsumer::begin(&input, "Dedicated Host", Some("Microsoft.Compute"), Casing::Exact).is_err());
        assert!(
            SegmentConsumer::begin(&input, "Dedicated Host", Some("Microsoft.Compute"), Casing::Insensitive)
                .is_ok()
        );
    }

    #[test]
    fn test_begin_reports_missing_resource_group_first() {
        let err = SegmentConsumer::begin(
            "/subscriptions/00000000-0000-0000-0000-000000000000/",
            "Availability Set",
            Some("Microsoft.Compute"),
            Casing::Exact,
        )
        .unwrap_err();
        assert_eq!(err.reason(), &IdError::MissingRequiredElement("resourceGroups"));
    }

    #[test]
    fn test_finish_returns_prefix() {
        let mut consumer =
            SegmentConsumer::begin(HOST, "Dedicated Host", Some("Microsoft.Compute"), Casing::Exact).unwrap();
        consumer.take("hostGroups").unwrap();
        consumer.take("hosts").unwrap();
        assert_eq!(
            consumer.finish().unwrap(),
            ("s1".to_string(), "rg1".to_string())
        );
    }

    #[test]
    fn test_finish_rejects_out_of_order_segments() {
        let input = "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/hosts/host1/hostGroups/group1";
        let mut consumer =
            SegmentConsumer::begin(input, "Dedicated Host", Some("Microsoft.Compute"), Casing::Exact).unwrap();
        consumer.take("hostGroups").unwrap();
        consumer.take("hosts").unwrap();
        let err = consumer.finish().unwrap_err();
        assert!(err.reason().is_malformed(), "{err}");
        assert!(err.to_string().contains("expected `hostGroups` before `hosts`"), "{err}");
    }

    #[test]
    fn test_finish_allows_any_order_when_repairing() {
        let input = "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/hosts/host1/hostGroups/group1";
        let mut consumer =
            SegmentConsumer::begin(input, "Dedicated Host", Some("Microsoft.Compute"), Casing::Insensitive)
                .unwrap();
        assert_eq!(consumer.take("hostGroups").unwrap(), "group1");
        assert_eq!(consumer.take("hosts").unwrap(), "host1");
        assert!(consumer.finish().is_ok());
    }

    #[test]
    fn test_finish_rejects_leftovers() {
        let consumer =
            SegmentConsumer::begin(HOST, "Dedicated Host", Some("Microsoft.Compute"), Casing::Exact).unwrap();
        let err = consumer.finish().unwrap_err();
        assert!(matches!(
            err.reason(),
            IdError::UnexpectedTrailingSegments { segments } if segments.len() == 2
        ));
    }
}
