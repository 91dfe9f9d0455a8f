//! CSS selector parts and compound selectors
//!
//! This module implements validated construction of compound selectors per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). Parts are appended
//! one at a time and every append is checked against the grammar order
//! element, id, class, attribute, pseudo-class, pseudo-element.

mod complex;

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub use complex::{CombinedSelector, Combinator, Selector};

/// The kind of a [`SelectorPart`], ordered by its position in a compound selector.
///
/// The derived `Ord` is the grammar order: a part may only follow parts of an
/// equal or lower kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// Type selector, e.g. `div`.
    Element,
    /// ID selector, e.g. `#main`.
    Id,
    /// Class selector, e.g. `.container`.
    Class,
    /// Attribute selector, e.g. `[href$=".png"]`.
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// Pseudo-class, e.g. `:hover`.
    PseudoClass,
    /// Pseudo-element, e.g. `::before`.
    PseudoElement,
}

impl PartKind {
    /// Whether a compound selector may contain more than one part of this kind.
    ///
    /// Element, id and pseudo-element occur at most once.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A single token of a compound selector. Values are stored as given and
/// rendered verbatim with the kind's prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum SelectorPart {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `a`
    Element(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The whole bracketed expression, without the brackets. Not validated.
    ///
    /// Examples: `[href]`, `[href$=".png"]`, `[lang|=en]`
    Attribute(String),

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// "A pseudo-class is a colon (:) followed by the name of the pseudo-class
    /// and optionally by a value between parentheses."
    ///
    /// Examples: `:hover`, `:focus`, `:nth-of-type(even)`
    PseudoClass(String),

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "A pseudo-element is represented by two colons (::) followed by the
    /// name of the pseudo-element."
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement(String),
}

impl SelectorPart {
    /// Create a part of the given kind.
    #[must_use]
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            PartKind::Element => Self::Element(value),
            PartKind::Id => Self::Id(value),
            PartKind::Class => Self::Class(value),
            PartKind::Attribute => Self::Attribute(value),
            PartKind::PseudoClass => Self::PseudoClass(value),
            PartKind::PseudoElement => Self::PseudoElement(value),
        }
    }

    /// The kind of this part.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        match self {
            Self::Element(_) => PartKind::Element,
            Self::Id(_) => PartKind::Id,
            Self::Class(_) => PartKind::Class,
            Self::Attribute(_) => PartKind::Attribute,
            Self::PseudoClass(_) => PartKind::PseudoClass,
            Self::PseudoElement(_) => PartKind::PseudoElement,
        }
    }

    /// The raw value, without prefix or brackets.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Element(v)
            | Self::Id(v)
            | Self::Class(v)
            | Self::Attribute(v)
            | Self::PseudoClass(v)
            | Self::PseudoElement(v) => v,
        }
    }

    /// The rendered token, e.g. `#main` or `[href]`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(name) => f.write_str(name),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Attribute(text) => write!(f, "[{text}]"),
            Self::PseudoClass(name) => write!(f, ":{name}"),
            Self::PseudoElement(name) => write!(f, "::{name}"),
        }
    }
}

/// A grammar violation while building a compound selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// A non-repeatable part (element, id, pseudo-element) was added twice.
    #[error("{kind} should not occur more than one time inside the selector")]
    Duplicate {
        /// The part that was repeated.
        kind: PartKind,
    },

    /// A part was added after a part that must come later.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({kind} cannot follow {after})"
    )]
    Order {
        /// The part that was rejected.
        kind: PartKind,
        /// The last part already in the selector.
        after: PartKind,
    },
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Parts can only be added through validating methods, so every value holds
/// at most one element, id and pseudo-element, in grammar order. The builder
/// methods take `self` by value and hand back the extended selector; a value
/// never shares parts with any other build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<SelectorPart>", into = "Vec<SelectorPart>")]
pub struct CompoundSelector {
    parts: Vec<SelectorPart>,
}

impl CompoundSelector {
    /// The empty compound selector. Renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// A compound selector holding a single part. Always valid.
    #[must_use]
    pub fn from_part(part: SelectorPart) -> Self {
        Self { parts: vec![part] }
    }

    /// Validate a whole list of parts, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] raised while appending the parts.
    pub fn try_from_parts<I>(parts: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = SelectorPart>,
    {
        let mut compound = Self::new();
        for part in parts {
            compound.push(part)?;
        }
        Ok(compound)
    }

    /// The parts in the order they were added.
    #[must_use]
    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// The kind of the last part added, `None` for the empty selector.
    ///
    /// Since parts are kept in grammar order, this is the current state of the
    /// builder: the highest kind seen so far.
    #[must_use]
    pub fn last_kind(&self) -> Option<PartKind> {
        self.parts.last().map(SelectorPart::kind)
    }

    /// Whether no parts have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check whether a part of `kind` may be appended next.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if `kind` is non-repeatable and already
    /// present, [`SelectorError::Order`] if a later kind was already added.
    pub fn check(&self, kind: PartKind) -> Result<(), SelectorError> {
        let Some(after) = self.last_kind() else {
            return Ok(());
        };
        if after > kind {
            return Err(SelectorError::Order { kind, after });
        }
        if after == kind && !kind.is_repeatable() {
            return Err(SelectorError::Duplicate { kind });
        }
        Ok(())
    }

    /// Append a part in place. On error the selector is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::check`].
    pub fn push(&mut self, part: SelectorPart) -> Result<(), SelectorError> {
        self.check(part.kind())?;
        self.parts.push(part);
        Ok(())
    }

    /// Append a part and return the extended selector.
    ///
    /// # Errors
    ///
    /// See [`CompoundSelector::check`].
    pub fn with(mut self, part: SelectorPart) -> Result<Self, SelectorError> {
        self.push(part)?;
        Ok(self)
    }

    /// Append a type selector: `name`.
    ///
    /// # Errors
    ///
    /// `Duplicate` if an element is already present, `Order` if any other
    /// part was added before it.
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Element(name.into()))
    }

    /// Append an ID selector: `#name`.
    ///
    /// # Errors
    ///
    /// `Duplicate` if an id is already present, `Order` after a class,
    /// attribute, pseudo-class or pseudo-element.
    pub fn id(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Id(name.into()))
    }

    /// Append a class selector: `.name`. Repeatable.
    ///
    /// # Errors
    ///
    /// `Order` after an attribute, pseudo-class or pseudo-element.
    pub fn class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Class(name.into()))
    }

    /// Append an attribute selector: `[text]`. Repeatable.
    ///
    /// # Errors
    ///
    /// `Order` after a pseudo-class or pseudo-element.
    pub fn attr(self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Attribute(text.into()))
    }

    /// Append a pseudo-class: `:name`. Repeatable.
    ///
    /// # Errors
    ///
    /// `Order` after a pseudo-element.
    pub fn pseudo_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::PseudoClass(name.into()))
    }

    /// Append a pseudo-element: `::name`. Terminal for this compound selector.
    ///
    /// # Errors
    ///
    /// `Duplicate` if a pseudo-element is already present.
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::PseudoElement(name.into()))
    }

    /// Use this selector as the left operand of a combinator.
    #[must_use]
    pub fn combine(
        self,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> Selector {
        Selector::from(self).combine(combinator, right)
    }

    /// Render the parts, concatenated in the order they were added.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

impl From<SelectorPart> for CompoundSelector {
    fn from(part: SelectorPart) -> Self {
        Self::from_part(part)
    }
}

impl TryFrom<Vec<SelectorPart>> for CompoundSelector {
    type Error = SelectorError;

    fn try_from(parts: Vec<SelectorPart>) -> Result<Self, Self::Error> {
        Self::try_from_parts(parts)
    }
}

impl From<CompoundSelector> for Vec<SelectorPart> {
    fn from(compound: CompoundSelector) -> Self {
        compound.parts
    }
}
