//! Property and serialization tests for the selector builder.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selcraft_css::selector::{CompoundSelector, PartKind, Selector, SelectorError, SelectorPart};
use selcraft_css::{combine, element};

const NAMES: &[&str] = &["div", "main", "a-b", "nth-child(2n+1)", "href$=\".png\"", "x_1"];

/// A list of parts in a grammar-valid order.
#[derive(Debug, Clone)]
struct ValidParts(Vec<SelectorPart>);

fn name(g: &mut Gen) -> String {
    (*g.choose(NAMES).unwrap_or(&"x")).to_string()
}

fn count(g: &mut Gen, max: u8) -> u8 {
    u8::arbitrary(g) % (max + 1)
}

impl Arbitrary for ValidParts {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut parts = Vec::new();
        for kind in [
            PartKind::Element,
            PartKind::Id,
            PartKind::Class,
            PartKind::Attribute,
            PartKind::PseudoClass,
            PartKind::PseudoElement,
        ] {
            let n = if kind.is_repeatable() { count(g, 3) } else { count(g, 1) };
            for _ in 0..n {
                parts.push(SelectorPart::new(kind, name(g)));
            }
        }
        Self(parts)
    }
}

#[quickcheck]
fn prop_valid_orderings_render_as_concatenation(parts: ValidParts) -> bool {
    let expected: String = parts.0.iter().map(SelectorPart::stringify).collect();
    let mut compound = CompoundSelector::new();
    for part in parts.0 {
        compound = match compound.with(part) {
            Ok(next) => next,
            Err(_) => return false,
        };
    }
    compound.stringify() == expected
}

#[quickcheck]
fn prop_earlier_kind_after_later_kind_is_order_error(parts: ValidParts, pick: u8) -> bool {
    let Ok(compound) = CompoundSelector::try_from_parts(parts.0) else {
        return false;
    };
    let Some(last) = compound.last_kind() else {
        return true;
    };
    let earlier: Vec<PartKind> = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
    ]
    .into_iter()
    .filter(|kind| *kind < last)
    .collect();
    if earlier.is_empty() {
        return true;
    }
    let kind = earlier[usize::from(pick) % earlier.len()];
    compound.with(SelectorPart::new(kind, "x")) == Err(SelectorError::Order { kind, after: last })
}

#[quickcheck]
fn prop_combine_separates_with_single_spaces(left: ValidParts, right: ValidParts) -> bool {
    let (Ok(l), Ok(r)) = (
        CompoundSelector::try_from_parts(left.0),
        CompoundSelector::try_from_parts(right.0),
    ) else {
        return false;
    };
    let expected = format!("{l} > {r}");
    combine(l, ">", r).stringify() == expected
}

// Serialization

#[test]
fn test_compound_serializes_as_part_list() -> Result<(), SelectorError> {
    let selector = element("a").class("link")?;
    let json = serde_json::to_string(&selector).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"element","value":"a"},{"kind":"class","value":"link"}]"#
    );
    Ok(())
}

#[test]
fn test_selector_round_trips_through_json() -> Result<(), SelectorError> {
    let selector = combine(
        element("ul").id("menu")?,
        ">",
        combine(element("li"), " ", element("a").pseudo_class("hover")?),
    );
    let json = serde_json::to_string(&selector).unwrap();
    let restored: Selector = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, selector);
    assert_eq!(restored.stringify(), "ul#menu > li   a:hover");
    Ok(())
}

#[test]
fn test_deserialize_rejects_invalid_order() {
    let json = r#"[{"kind":"class","value":"a"},{"kind":"id","value":"b"}]"#;
    let err = serde_json::from_str::<CompoundSelector>(json).unwrap_err();
    assert!(err.to_string().contains("id cannot follow class"));
}

#[test]
fn test_deserialize_rejects_duplicate_element() {
    let json = r#"[{"kind":"element","value":"a"},{"kind":"element","value":"b"}]"#;
    let err = serde_json::from_str::<CompoundSelector>(json).unwrap_err();
    assert!(err.to_string().contains("element should not occur more than one time"));
}

#[test]
fn test_combinator_serializes_as_symbol() {
    let selector = combine(element("a"), "+", element("b"));
    let json = serde_json::to_value(&selector).unwrap();
    assert_eq!(json["combined"]["combinator"], "+");
}
