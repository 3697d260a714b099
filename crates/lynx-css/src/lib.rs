//! CSS selector construction and serialization for the Lynx toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical ordering and singleton checks at construction time
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Arbitrarily deep nesting
//!
//! - **Serialization** to canonical selector text
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Validating part values (they are passed through verbatim)
//! - Namespaces and the internal grammar of functional pseudo-classes

/// The [`SelectorBuilder`] facade.
pub mod builder;
/// Errors raised while building a selector.
pub mod error;
/// Selector model and serialization per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use selector::{
    Combinator, CombinatorExpression, CompoundSelector, PartKind, Selector, SelectorPart,
    Specificity,
};
