//! Entry points for building selectors.
//!
//! Each starter returns a fresh [`CompoundSelector`] holding one part; the
//! chain continues with the fallible methods on that value:
//!
//! ```ignore
//! let s = element("div").id("main")?.class("container")?.class("draggable")?;
//! assert_eq!(s.stringify(), "div#main.container.draggable");
//!
//! let c = combine(element("a"), "+", element("b"));
//! assert_eq!(c.stringify(), "a + b");
//! ```
//!
//! A single part is always a valid compound selector, so the starters cannot fail.

use crate::selector::{Combinator, CompoundSelector, Selector, SelectorPart};

/// Start a compound selector with a type selector: `name`.
#[must_use]
pub fn element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::from_part(SelectorPart::Element(name.into()))
}

/// Start a compound selector with an ID selector: `#name`.
#[must_use]
pub fn id(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::from_part(SelectorPart::Id(name.into()))
}

/// Start a compound selector with a class selector: `.name`.
#[must_use]
pub fn class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::from_part(SelectorPart::Class(name.into()))
}

/// Start a compound selector with an attribute selector: `[text]`.
#[must_use]
pub fn attr(text: impl Into<String>) -> CompoundSelector {
    CompoundSelector::from_part(SelectorPart::Attribute(text.into()))
}

/// Start a compound selector with a pseudo-class: `:name`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::from_part(SelectorPart::PseudoClass(name.into()))
}

/// Start a compound selector with a pseudo-element: `::name`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::from_part(SelectorPart::PseudoElement(name.into()))
}

/// Join two selectors with a combinator.
///
/// Renders as `left symbol right`. Operands may be compound or already combined.
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl Into<Combinator>,
    right: impl Into<Selector>,
) -> Selector {
    left.into().combine(combinator, right)
}
