//! Roundtrip and canonicalization properties across every resource kind.

use armid::{ResourceKind, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};
use proptest::prelude::*;

/// Builds an ID string for `kind`, flipping the case of literal keys where
/// `case_mask` says so.
fn build(kind: ResourceKind, subscription: &str, group: &str, values: &[String], case_mask: &[bool]) -> String {
    let mut mask = case_mask.iter().copied().cycle();
    let mut flip = |literal: &str| -> String {
        literal
            .chars()
            .map(|c| {
                if mask.next().unwrap_or(false) {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                } else {
                    c
                }
            })
            .collect()
    };

    let mut out = format!("/{}/{subscription}/{}/{group}", flip(SUBSCRIPTIONS), flip(RESOURCE_GROUPS));
    if let Some(provider) = kind.provider() {
        out.push_str(&format!("/{}/{}", flip(PROVIDERS), flip(provider)));
    }
    for (segment, value) in kind.segments().iter().zip(values) {
        out.push_str(&format!("/{}/{value}", flip(segment)));
    }
    out
}

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9._-]{0,15}"
}

fn arb_id() -> impl Strategy<Value = (ResourceKind, String, String, Vec<String>)> {
    prop::sample::select(ResourceKind::ALL).prop_flat_map(|kind| {
        (
            Just(kind),
            name(),
            name(),
            prop::collection::vec(name(), kind.segments().len()),
        )
    })
}

proptest! {
    #[test]
    fn prop_parse_format_roundtrip((kind, subscription, group, values) in arb_id()) {
        let canonical = build(kind, &subscription, &group, &values, &[false]);
        let id = armid::parse(kind, &canonical).unwrap();

        prop_assert_eq!(id.kind(), kind);
        prop_assert_eq!(id.subscription_id(), subscription.as_str());
        prop_assert_eq!(id.resource_group(), group.as_str());
        prop_assert_eq!(id.segment_values(), values.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(armid::format(&id), canonical.clone());

        let reparsed = armid::parse(kind, &armid::format(&id)).unwrap();
        prop_assert_eq!(reparsed, id);
    }

    #[test]
    fn prop_insensitive_parse_canonicalizes(
        (kind, subscription, group, values) in arb_id(),
        case_mask in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let canonical = build(kind, &subscription, &group, &values, &[false]);
        let variant = build(kind, &subscription, &group, &values, &case_mask);

        let repaired = armid::parse_insensitively(kind, &variant).unwrap();
        let strict = armid::parse(kind, &canonical).unwrap();
        prop_assert_eq!(armid::format(&repaired), armid::format(&strict));
        prop_assert_eq!(armid::rewrite::normalize_kind(kind, &variant).unwrap(), canonical);
    }

    #[test]
    fn prop_strict_parse_rejects_changed_literal_casing(
        (kind, subscription, group, values) in arb_id(),
        case_mask in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let canonical = build(kind, &subscription, &group, &values, &[false]);
        let variant = build(kind, &subscription, &group, &values, &case_mask);
        prop_assume!(variant != canonical);

        prop_assert!(armid::parse(kind, &variant).is_err());
    }

    #[test]
    fn prop_trailing_segments_rejected(
        (kind, subscription, group, values) in arb_id(),
        extra_key in "[a-z]{1,8}",
        extra_value in name(),
    ) {
        let canonical = build(kind, &subscription, &group, &values, &[false]);
        let extended = format!("{canonical}/{extra_key}/{extra_value}");

        let err = armid::parse(kind, &extended).unwrap_err();
        prop_assert_eq!(err.input(), extended.as_str());
    }
}
