//! Combinators and combined (complex) selectors.

use std::fmt;
use std::hash::{Hash, Hasher};

use selcraft_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use super::CompoundSelector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Symbols other than the four CSS combinators are kept as [`Combinator::Verbatim`]
/// and rendered unchanged.
///
/// Equality and hashing go by the rendered symbol, so `Verbatim(">")` equals
/// `Child` and both survive a serde round trip as the same value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Symbol", into = "String")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,

    /// Any other symbol, inserted as given.
    Verbatim(String),
}

/// Serialized form of a combinator. Decoding maps the symbol without warning.
#[derive(Deserialize)]
#[serde(transparent)]
struct Symbol(String);

impl From<Symbol> for Combinator {
    fn from(Symbol(symbol): Symbol) -> Self {
        Self::named(&symbol).unwrap_or(Self::Verbatim(symbol))
    }
}

impl Combinator {
    /// Map a symbol to a combinator. Unknown symbols warn once and are kept verbatim.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        Self::named(symbol).unwrap_or_else(|| {
            warn_once(
                "Selector",
                &format!("non-standard combinator {symbol:?} rendered verbatim"),
            );
            Self::Verbatim(symbol.to_string())
        })
    }

    fn named(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }

    /// The text placed between the operands' surrounding spaces.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Verbatim(symbol) => symbol,
        }
    }
}

impl PartialEq for Combinator {
    fn eq(&self, other: &Self) -> bool {
        self.symbol() == other.symbol()
    }
}

impl Eq for Combinator {}

impl Hash for Combinator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol().hash(state);
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<&str> for Combinator {
    fn from(symbol: &str) -> Self {
        Self::from_symbol(symbol)
    }
}

impl From<String> for Combinator {
    fn from(symbol: String) -> Self {
        Self::from_symbol(&symbol)
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        match combinator {
            Combinator::Verbatim(symbol) => symbol,
            named => named.symbol().to_string(),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Either operand may itself be
/// combined, so `A + B ~ C` built as `combine(A, "+", combine(B, "~", C))`
/// is a right-leaning tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinedSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator: combinator.into(),
            right: Box::new(right.into()),
        }
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator between the operands.
    #[must_use]
    pub const fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// Render as `left symbol right` with one space on each side of the symbol.
    ///
    /// The descendant symbol is itself a space, which yields three spaces in a row.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Any selector value: a single compound selector or a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    /// A compound selector with no combinator.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator.
    Combined(CombinedSelector),
}

impl Selector {
    /// Use this selector as the left operand of a combinator.
    #[must_use]
    pub fn combine(self, combinator: impl Into<Combinator>, right: impl Into<Self>) -> Self {
        Self::Combined(CombinedSelector::new(self, combinator, right))
    }

    /// The compound selectors in render order, left to right.
    #[must_use]
    pub fn compounds(&self) -> Vec<&CompoundSelector> {
        let mut out = Vec::new();
        self.collect_compounds(&mut out);
        out
    }

    fn collect_compounds<'a>(&'a self, out: &mut Vec<&'a CompoundSelector>) {
        match self {
            Self::Compound(compound) => out.push(compound),
            Self::Combined(combined) => {
                combined.left.collect_compounds(out);
                combined.right.collect_compounds(out);
            }
        }
    }

    /// Render the whole selector tree.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Combined(combined) => write!(f, "{combined}"),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SelectorPart;

    fn compound(name: &str) -> CompoundSelector {
        CompoundSelector::from_part(SelectorPart::Element(name.to_string()))
    }

    #[test]
    fn test_combinator_symbols() {
        assert_eq!(Combinator::from(" "), Combinator::Descendant);
        assert_eq!(Combinator::from(">"), Combinator::Child);
        assert_eq!(Combinator::from("+"), Combinator::NextSibling);
        assert_eq!(Combinator::from("~"), Combinator::SubsequentSibling);
        for symbol in [" ", ">", "+", "~"] {
            assert_eq!(Combinator::from(symbol).symbol(), symbol);
        }
    }

    #[test]
    fn test_unknown_combinator_is_verbatim() {
        let combinator = Combinator::from("||");
        assert_eq!(combinator, Combinator::Verbatim("||".to_string()));
        assert_eq!(String::from(combinator), "||");
    }

    #[test]
    fn test_verbatim_standard_symbol_equals_named_combinator() {
        let verbatim = Combinator::Verbatim(">".to_string());
        assert_eq!(verbatim, Combinator::Child);
        assert_ne!(verbatim, Combinator::NextSibling);

        let mut set = std::collections::HashSet::new();
        assert!(set.insert(Combinator::Child));
        assert!(!set.insert(verbatim));
    }

    #[test]
    fn test_combinator_survives_serde_round_trip() {
        let combined = CombinedSelector::new(
            compound("a"),
            Combinator::Verbatim("+".to_string()),
            compound("b"),
        );
        let json = serde_json::to_string(&combined).unwrap();
        let restored: CombinedSelector = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, combined);
        assert_eq!(restored.combinator(), &Combinator::NextSibling);
        assert_eq!(restored.stringify(), "a + b");

        let unknown: Combinator = serde_json::from_str(r#""/deep/""#).unwrap();
        assert_eq!(unknown, Combinator::Verbatim("/deep/".to_string()));
    }

    #[test]
    fn test_selector_types_are_send_and_sync() {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Selector>();
        assert_send_sync::<CompoundSelector>();
        assert_send_sync::<CombinedSelector>();
        assert_send_sync::<Combinator>();
        assert_send_sync::<SelectorPart>();
        assert_send_sync::<crate::selector::SelectorError>();
    }

    #[test]
    fn test_compounds_in_render_order() {
        let selector = Selector::from(compound("a"))
            .combine(">", compound("b").combine("+", compound("c")));
        let names: Vec<String> = selector
            .compounds()
            .into_iter()
            .map(CompoundSelector::stringify)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_accessors() {
        let combined = CombinedSelector::new(compound("ul"), ">", compound("li"));
        assert_eq!(combined.left().stringify(), "ul");
        assert_eq!(combined.combinator(), &Combinator::Child);
        assert_eq!(combined.right().stringify(), "li");
        assert_eq!(combined.stringify(), "ul > li");
    }
}
