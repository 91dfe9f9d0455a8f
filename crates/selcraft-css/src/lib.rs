//! CSS selector construction for selcraft.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector parts** ([§ 5](https://www.w3.org/TR/selectors-4/#elemental-selectors),
//!   [§ 6](https://www.w3.org/TR/selectors-4/#attribute-selectors))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element tokens
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Grammar order enforced on every append
//!   - Element, id and pseudo-element at most once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Nested combination, rendered recursively
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Specificity
//! - Matching against a document tree

/// Facade functions that start and combine selectors.
pub mod builder;
/// Selector parts, compound and combined selectors.
pub mod selector;

// Re-exports for convenience
pub use builder::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use selector::{
    CombinedSelector, Combinator, CompoundSelector, PartKind, Selector, SelectorError,
    SelectorPart,
};
