//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;
use std::iter;
use std::mem;
use std::str::FromStr;

use lynx_common::warning::warn_once;
use serde::Serialize;

use super::{CompoundSelector, Selector, Specificity};
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
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
}

impl Combinator {
    /// The canonical token: `" "`, `">"`, `"+"` or `"~"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts the four canonical tokens. Surrounding whitespace is trimmed
    /// with a warning, so `" > "` reads as `>` and `"\t"` as the descendant
    /// combinator. The empty string is rejected.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectorError::InvalidCombinator {
            token: token.to_string(),
        };
        if token.is_empty() {
            return Err(invalid());
        }

        let combinator = match token.trim() {
            "" => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            _ => return Err(invalid()),
        };

        if token != combinator.as_str() {
            warn_once(
                "Selectors",
                &format!(
                    "combinator {token:?} normalized to {:?}",
                    combinator.as_str()
                ),
            );
        }

        Ok(combinator)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Either side may itself be an
/// expression; the builder nests to the right, so `A > B + C` is
/// `A > (B + C)`.
///
/// Built once and never modified. Children are owned, so a tree can never
/// refer back to one of its own ancestors.
///
/// Right-nested chains can be arbitrarily deep. Rendering, specificity,
/// cloning, comparison and drop walk the right spine in a loop; only
/// left-nested expressions recurse. `Debug` and `Serialize` still follow
/// the tree shape.
#[derive(Debug, Serialize)]
pub struct CombinatorExpression {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinatorExpression {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator,
            right: Box::new(right.into()),
        }
    }

    /// The selector before the combinator.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining both sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The selector after the combinator.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// Serialize to canonical selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Sum of the specificities of both sides.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.spine()
            .fold(self.tail().specificity(), |spec, expression| {
                spec + expression.left.specificity()
            })
    }

    /// Number of compound selectors in the expression.
    #[must_use]
    pub fn compound_count(&self) -> usize {
        self.spine()
            .map(|expression| expression.left.compound_count())
            .sum::<usize>()
            + 1
    }

    /// This expression followed by every expression nested on its right.
    fn spine(&self) -> impl Iterator<Item = &Self> {
        iter::successors(Some(self), |expression| match expression.right.as_ref() {
            Selector::Combined(next) => Some(next),
            Selector::Compound(_) => None,
        })
    }

    /// The compound selector at the end of the right spine.
    fn tail(&self) -> &CompoundSelector {
        let mut expression = self;
        loop {
            match expression.right.as_ref() {
                Selector::Combined(next) => expression = next,
                Selector::Compound(compound) => return compound,
            }
        }
    }
}

impl Clone for CombinatorExpression {
    fn clone(&self) -> Self {
        let spine: Vec<&Self> = self.spine().collect();

        let mut right = Selector::Compound(self.tail().clone());
        for expression in spine.iter().skip(1).rev() {
            right = Selector::Combined(Self {
                left: expression.left.clone(),
                combinator: expression.combinator,
                right: Box::new(right),
            });
        }

        Self {
            left: self.left.clone(),
            combinator: self.combinator,
            right: Box::new(right),
        }
    }
}

impl PartialEq for CombinatorExpression {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            if a.combinator != b.combinator || a.left != b.left {
                return false;
            }
            match (a.right.as_ref(), b.right.as_ref()) {
                (Selector::Combined(next_a), Selector::Combined(next_b)) => {
                    (a, b) = (next_a, next_b);
                }
                (right_a, right_b) => return right_a == right_b,
            }
        }
    }
}

impl Eq for CombinatorExpression {}

impl Drop for CombinatorExpression {
    fn drop(&mut self) {
        // Unlink the right spine one node at a time; each detached node is
        // left holding an empty compound, so its own drop stops immediately.
        let mut next = mem::replace(
            self.right.as_mut(),
            Selector::Compound(CompoundSelector::new()),
        );
        while let Selector::Combined(mut expression) = next {
            next = mem::replace(
                expression.right.as_mut(),
                Selector::Compound(CompoundSelector::new()),
            );
        }
    }
}

impl fmt::Display for CombinatorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for expression in self.spine() {
            match expression.combinator {
                // Whitespace is the token itself; padding it would double the space.
                Combinator::Descendant => write!(f, "{} ", expression.left)?,
                combinator => write!(f, "{} {combinator} ", expression.left)?,
            }
        }
        fmt::Display::fmt(self.tail(), f)
    }
}
