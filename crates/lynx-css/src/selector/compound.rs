//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."

use std::fmt;

use lynx_common::warning::warn_once;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::{PartKind, SelectorPart, Specificity};
use crate::error::SelectorError;

/// A compound selector under construction.
///
/// Parts are kept in insertion order. Adding a part never modifies the
/// receiver: every add-operation returns a new selector, so a failed add
/// leaves the original exactly as it was.
///
/// The canonical order is tracked as a small state machine over ranks.
/// `highest` starts at `None` and only moves forward, one successful add at a
/// time; any part ranked below it is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    parts: Vec<SelectorPart>,
    #[serde(skip)]
    highest: Option<PartKind>,
}

impl CompoundSelector {
    /// An empty compound selector. It renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parts: Vec::new(),
            highest: None,
        }
    }

    /// A compound selector holding exactly one part.
    ///
    /// Infallible: neither the order check nor the singleton check can
    /// reject the first part.
    #[must_use]
    pub fn from_part(kind: PartKind, value: impl Into<String>) -> Self {
        let mut compound = Self::new();
        compound.push(kind, value.into());
        compound
    }

    /// Append a part of any kind.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateSingleton`] if `kind` is an element,
    /// id or pseudo-element and one is already present, and
    /// [`SelectorError::OrderViolation`] if `kind` ranks below a part that
    /// was added earlier.
    pub fn add(&self, kind: PartKind, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.check(kind)?;

        let mut next = self.clone();
        next.push(kind, value.into());
        Ok(next)
    }

    /// Append the [type selector](https://www.w3.org/TR/selectors-4/#type-selectors).
    ///
    /// # Errors
    ///
    /// Fails if an element is already present or any other part was added.
    pub fn element(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Element, value)
    }

    /// Append the [ID selector](https://www.w3.org/TR/selectors-4/#id-selectors).
    ///
    /// # Errors
    ///
    /// Fails if an id is already present or a part ranked after it was added.
    pub fn id(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Id, value)
    }

    /// Append a [class selector](https://www.w3.org/TR/selectors-4/#class-html).
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element was added.
    pub fn class(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Class, value)
    }

    /// Append an [attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors).
    ///
    /// `value` is the text between the brackets, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element was added.
    pub fn attr(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::Attribute, value)
    }

    /// Append a [pseudo-class](https://www.w3.org/TR/selectors-4/#pseudo-classes).
    ///
    /// Functional pseudo-classes are passed through whole: `nth-of-type(even)`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element was added.
    pub fn pseudo_class(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::PseudoClass, value)
    }

    /// Append the [pseudo-element](https://www.w3.org/TR/selectors-4/#pseudo-elements).
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_element(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.add(PartKind::PseudoElement, value)
    }

    /// Parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    /// Parts of one kind, in insertion order.
    pub fn parts_of(&self, kind: PartKind) -> impl Iterator<Item = &SelectorPart> {
        self.parts.iter().filter(move |part| part.kind() == kind)
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no part has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Rank of the highest-ranked part added so far, or 0 when empty.
    #[must_use]
    pub fn highest_rank(&self) -> u8 {
        self.highest.map_or(0, PartKind::rank)
    }

    /// Serialize to canonical selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();

        for part in &self.parts {
            match part.kind() {
                // "count the number of ID selectors in the selector (= A)"
                PartKind::Id => spec.0 += 1,

                // "count the number of class selectors, attributes selectors,
                // and pseudo-classes in the selector (= B)"
                PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => spec.1 += 1,

                // "count the number of type selectors and pseudo-elements
                // in the selector (= C)"
                PartKind::Element | PartKind::PseudoElement => spec.2 += 1,
            }
        }

        spec
    }

    /// Validation for an incoming part. Runs before any mutation.
    fn check(&self, kind: PartKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.parts_of(kind).next().is_some() {
            return Err(SelectorError::DuplicateSingleton { kind });
        }

        match self.highest {
            Some(highest) if kind < highest => {
                Err(SelectorError::OrderViolation { kind, highest })
            }
            _ => Ok(()),
        }
    }

    fn push(&mut self, kind: PartKind, value: String) {
        let part = SelectorPart::new(kind, value);
        if part.value().is_empty() {
            warn_once(
                "Selectors",
                &format!("empty {kind} value renders as '{part}'"),
            );
        }

        self.parts.push(part);
        self.highest = self.highest.max(Some(kind));
    }
}

impl fmt::Display for CompoundSelector {
    /// Groups are written in rank order rather than raw insertion order.
    /// The two agree while the order check holds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in PartKind::iter() {
            for part in self.parts_of(kind) {
                write!(f, "{part}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_compound() {
        let compound = CompoundSelector::new();
        assert!(compound.is_empty());
        assert_eq!(compound.highest_rank(), 0);
        assert_eq!(compound.stringify(), "");
    }

    #[test]
    fn test_highest_rank_only_moves_forward() {
        let compound = CompoundSelector::from_part(PartKind::Id, "main");
        assert_eq!(compound.highest_rank(), 2);

        let compound = compound.pseudo_class("hover").unwrap();
        assert_eq!(compound.highest_rank(), 5);

        let compound = compound.pseudo_class("focus").unwrap();
        assert_eq!(compound.highest_rank(), 5);
    }

    #[test]
    fn test_failed_add_does_not_advance_state() {
        let compound = CompoundSelector::from_part(PartKind::Class, "c");
        assert!(compound.element("div").is_err());
        assert_eq!(compound.highest_rank(), 3);
        assert_eq!(compound.len(), 1);
    }

    #[test]
    fn test_duplicate_checked_before_order() {
        // A second id after a class is both out of order and a duplicate;
        // the singleton rule wins.
        let compound = CompoundSelector::from_part(PartKind::Id, "a")
            .class("b")
            .unwrap();
        assert_eq!(
            compound.id("c"),
            Err(SelectorError::DuplicateSingleton { kind: PartKind::Id })
        );
    }

    #[test]
    fn test_render_groups_by_rank() {
        // Built out of insertion order by hand to pin down the grouping.
        let compound = CompoundSelector {
            parts: vec![
                SelectorPart::new(PartKind::PseudoClass, "hover"),
                SelectorPart::new(PartKind::Class, "a"),
                SelectorPart::new(PartKind::Element, "p"),
                SelectorPart::new(PartKind::Class, "b"),
            ],
            highest: Some(PartKind::PseudoClass),
        };
        assert_eq!(compound.stringify(), "p.a.b:hover");
    }

    #[test]
    fn test_empty_value_warns() {
        let compound = CompoundSelector::from_part(PartKind::Class, "");
        assert_eq!(compound.stringify(), ".");
        assert!(lynx_common::warning::has_warned(
            "Selectors",
            "empty class value renders as '.'"
        ));
    }
}
