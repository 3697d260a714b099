//! CSS selector model and serialization
//!
//! This module implements the construction side of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/): compound selectors
//! assembled from typed parts, joined by combinators, and written back out in
//! canonical textual form.

mod combinator;
mod compound;

use std::fmt;
use std::ops::Add;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

pub use combinator::{Combinator, CombinatorExpression};
pub use compound::CompoundSelector;

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// The kind of a single fragment of a compound selector.
///
/// The discriminant is the kind's canonical rank. Within one compound
/// selector, parts must appear in non-decreasing rank order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass = 5,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::placeholder`
    PseudoElement = 6,
}

impl PartKind {
    /// Canonical rank, from 1 (element) to 6 (pseudo-element).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Singleton kinds may occur at most once per compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// One fragment of a compound selector, e.g. the `.container` in
/// `div.container`.
///
/// The value is stored verbatim and is never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorPart {
    kind: PartKind,
    value: String,
}

impl SelectorPart {
    /// Create a part of the given kind.
    #[must_use]
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The kind of this part.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        self.kind
    }

    /// The raw value, without any prefix or brackets.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = &self.value;
        match self.kind {
            PartKind::Element => f.write_str(value),
            PartKind::Id => write!(f, "#{value}"),
            PartKind::Class => write!(f, ".{value}"),
            PartKind::Attribute => write!(f, "[{value}]"),
            PartKind::PseudoClass => write!(f, ":{value}"),
            PartKind::PseudoElement => write!(f, "::{value}"),
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// A fully constructed selector: either a single compound selector or a
/// combinator expression joining two selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Selector {
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    Compound(CompoundSelector),

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    Combined(CombinatorExpression),
}

impl Selector {
    /// Serialize to canonical selector text.
    ///
    /// Calling this repeatedly on the same selector always yields the same
    /// string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Specificity of the whole selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Combined(expression) => expression.specificity(),
        }
    }

    /// The compound selector, if this is not a combinator expression.
    #[must_use]
    pub const fn as_compound(&self) -> Option<&CompoundSelector> {
        match self {
            Self::Compound(compound) => Some(compound),
            Self::Combined(_) => None,
        }
    }

    /// Number of compound selectors in the tree.
    #[must_use]
    pub fn compound_count(&self) -> usize {
        match self {
            Self::Compound(_) => 1,
            Self::Combined(expression) => expression.compound_count(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(expression) => fmt::Display::fmt(expression, f),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<CombinatorExpression> for Selector {
    fn from(expression: CombinatorExpression) -> Self {
        Self::Combined(expression)
    }
}
