//! Entry point for building selectors.
//!
//! ```
//! use lynx_css::SelectorBuilder;
//!
//! # fn main() -> Result<(), lynx_css::SelectorError> {
//! let selector = SelectorBuilder::combine(
//!     SelectorBuilder::element("ul").class("nav")?,
//!     ">",
//!     SelectorBuilder::element("li").pseudo_class("first-child")?,
//! )?;
//! assert_eq!(selector.stringify(), "ul.nav > li:first-child");
//! # Ok(())
//! # }
//! ```

use crate::error::SelectorError;
use crate::selector::{Combinator, CombinatorExpression, CompoundSelector, PartKind, Selector};

/// Stateless facade over [`CompoundSelector`] and [`CombinatorExpression`].
///
/// Each part constructor starts a fresh compound selector with that one part;
/// further parts are chained onto the returned value. [`combine`](Self::combine)
/// joins any two selectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Start a compound selector with a type selector, e.g. `div`.
    #[must_use]
    pub fn element(value: impl Into<String>) -> CompoundSelector {
        CompoundSelector::from_part(PartKind::Element, value)
    }

    /// Start a compound selector with an ID selector, e.g. `#main`.
    #[must_use]
    pub fn id(value: impl Into<String>) -> CompoundSelector {
        CompoundSelector::from_part(PartKind::Id, value)
    }

    /// Start a compound selector with a class selector, e.g. `.container`.
    #[must_use]
    pub fn class(value: impl Into<String>) -> CompoundSelector {
        CompoundSelector::from_part(PartKind::Class, value)
    }

    /// Start a compound selector with an attribute selector, e.g. `[href]`.
    #[must_use]
    pub fn attr(value: impl Into<String>) -> CompoundSelector {
        CompoundSelector::from_part(PartKind::Attribute, value)
    }

    /// Start a compound selector with a pseudo-class, e.g. `:focus`.
    #[must_use]
    pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
        CompoundSelector::from_part(PartKind::PseudoClass, value)
    }

    /// Start a compound selector with a pseudo-element, e.g. `::before`.
    #[must_use]
    pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
        CompoundSelector::from_part(PartKind::PseudoElement, value)
    }

    /// Join two selectors with a combinator token: `" "`, `">"`, `"+"` or `"~"`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidCombinator`] for any other token.
    pub fn combine(
        left: impl Into<Selector>,
        combinator: &str,
        right: impl Into<Selector>,
    ) -> Result<Selector, SelectorError> {
        let combinator: Combinator = combinator.parse()?;
        Ok(CombinatorExpression::new(left, combinator, right).into())
    }
}
