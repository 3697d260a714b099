//! Errors raised while building a selector.

use thiserror::Error;

use crate::selector::PartKind;

/// Every failure is detected before the selector is touched, so the value an
/// add-operation was called on is always left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part ranked below one that is already present.
    #[error(
        "{kind} cannot follow {highest}: parts must be ordered element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The kind that was being added.
        kind: PartKind,
        /// The highest-ranked kind already in the compound selector.
        highest: PartKind,
    },

    /// A second element, id or pseudo-element.
    #[error("{kind} may occur at most once in a compound selector")]
    DuplicateSingleton {
        /// The singleton kind that was repeated.
        kind: PartKind,
    },

    /// A combinator token other than `' '`, `'>'`, `'+'` or `'~'`.
    #[error("invalid combinator {token:?}: expected one of ' ', '>', '+', '~'")]
    InvalidCombinator {
        /// The token as given.
        token: String,
    },
}
